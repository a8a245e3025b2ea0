//! Core configuration types for a migration run

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::content_saver::markdown_converter::ConversionOptions;
use crate::utils::{
    DEFAULT_CATEGORY, DEFAULT_CONVERSION_TIMEOUT_SECS, DEFAULT_MAX_CONCURRENT_POSTS,
    DEFAULT_OUTPUT_DIR, DEFAULT_PATH_PREFIX, DEFAULT_UTC_OFFSET, sanitize,
};

static UTC_OFFSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:Z|[+-]\d{2}:\d{2})$").expect("UTC_OFFSET: hardcoded regex is valid")
});

/// Settings for one migration run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    /// Root of the Hugo content tree posts are written into
    pub(crate) output_dir: PathBuf,
    /// First path segment under `output_dir`
    pub(crate) path_prefix: String,
    /// Offset appended to front-matter dates, `+02:00` style or `Z`
    pub(crate) utc_offset: String,
    pub(crate) draft: bool,
    pub(crate) default_category: String,
    pub(crate) max_concurrent_posts: usize,
    pub(crate) conversion_timeout_secs: u64,
    /// File that collects blocks needing a human look
    pub(crate) review_log: Option<PathBuf>,
    pub(crate) conversion: ConversionOptions,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            path_prefix: DEFAULT_PATH_PREFIX.to_string(),
            utc_offset: DEFAULT_UTC_OFFSET.to_string(),
            draft: false,
            default_category: DEFAULT_CATEGORY.to_string(),
            max_concurrent_posts: DEFAULT_MAX_CONCURRENT_POSTS,
            conversion_timeout_secs: DEFAULT_CONVERSION_TIMEOUT_SECS,
            review_log: None,
            conversion: ConversionOptions::default(),
        }
    }
}

impl MigrationConfig {
    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub async fn from_json_file(path: &Path) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_json_str(&contents)
    }

    /// Reject settings the runner cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.max_concurrent_posts == 0 {
            bail!("max_concurrent_posts must be at least 1");
        }
        if self.conversion_timeout_secs == 0 {
            bail!("conversion_timeout_secs must be at least 1");
        }
        if !UTC_OFFSET.is_match(&self.utc_offset) {
            bail!(
                "utc_offset must look like +02:00, -05:30 or Z, got {:?}",
                self.utc_offset
            );
        }
        if sanitize(&self.default_category).trim().is_empty() {
            bail!(
                "default_category {:?} is empty once sanitized",
                self.default_category
            );
        }
        Ok(())
    }
}
