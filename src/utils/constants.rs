//! Shared defaults for the migration
//!
//! Default values used by the config layer and the front-matter writer.

/// Output directory used when no config file is given
pub const DEFAULT_OUTPUT_DIR: &str = "content/post";

/// First path segment under the output directory
///
/// Migrated posts live under `old/` so they never clash with new content.
pub const DEFAULT_PATH_PREFIX: &str = "old";

/// UTC offset appended to every front-matter date
pub const DEFAULT_UTC_OFFSET: &str = "+02:00";

/// Category used when a post has none left after sanitizing
pub const DEFAULT_CATEGORY: &str = "General";

/// The CMS placeholder tag, never carried over
pub const UNCATEGORIZED_TAG: &str = "uncategorized";

/// Posts converted at the same time
pub const DEFAULT_MAX_CONCURRENT_POSTS: usize = 8;

/// Per-post conversion budget in seconds
///
/// Conversion is normally milliseconds; a post taking this long has hit a
/// pathological input and is reported instead of holding up the batch.
pub const DEFAULT_CONVERSION_TIMEOUT_SECS: u64 = 30;
