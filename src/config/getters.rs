//! Getter methods for `MigrationConfig`

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::types::MigrationConfig;
use crate::content_saver::front_matter::FrontMatterSettings;
use crate::content_saver::markdown_converter::ConversionOptions;

impl MigrationConfig {
    #[must_use]
    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }

    #[must_use]
    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    #[must_use]
    pub fn utc_offset(&self) -> &str {
        &self.utc_offset
    }

    #[must_use]
    pub fn draft(&self) -> bool {
        self.draft
    }

    #[must_use]
    pub fn default_category(&self) -> &str {
        &self.default_category
    }

    #[must_use]
    pub fn max_concurrent_posts(&self) -> usize {
        self.max_concurrent_posts
    }

    #[must_use]
    pub fn conversion_timeout_secs(&self) -> u64 {
        self.conversion_timeout_secs
    }

    #[must_use]
    pub fn conversion_timeout(&self) -> Duration {
        Duration::from_secs(self.conversion_timeout_secs)
    }

    #[must_use]
    pub fn review_log(&self) -> Option<&Path> {
        self.review_log.as_deref()
    }

    #[must_use]
    pub fn conversion(&self) -> &ConversionOptions {
        &self.conversion
    }

    /// The subset of settings the front-matter writer needs
    #[must_use]
    pub fn front_matter_settings(&self) -> FrontMatterSettings {
        FrontMatterSettings {
            utc_offset: self.utc_offset.clone(),
            draft: self.draft,
            default_category: self.default_category.clone(),
        }
    }
}
