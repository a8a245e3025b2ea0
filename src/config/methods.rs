//! Builder methods available for all states

use std::path::PathBuf;

use super::builder::MigrationConfigBuilder;

impl<State> MigrationConfigBuilder<State> {
    #[must_use]
    pub fn path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.path_prefix = prefix.into();
        self
    }

    /// Offset written after every front-matter date (`+02:00`, `-05:00`, `Z`)
    #[must_use]
    pub fn utc_offset(mut self, offset: impl Into<String>) -> Self {
        self.config.utc_offset = offset.into();
        self
    }

    #[must_use]
    pub fn draft(mut self, draft: bool) -> Self {
        self.config.draft = draft;
        self
    }

    #[must_use]
    pub fn default_category(mut self, category: impl Into<String>) -> Self {
        self.config.default_category = category.into();
        self
    }

    /// Upper bound on posts converted at the same time
    ///
    /// Each conversion occupies one blocking-pool thread.
    #[must_use]
    pub fn max_concurrent_posts(mut self, limit: usize) -> Self {
        self.config.max_concurrent_posts = limit;
        self
    }

    #[must_use]
    pub fn conversion_timeout_secs(mut self, secs: u64) -> Self {
        self.config.conversion_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn review_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.review_log = Some(path.into());
        self
    }
}
