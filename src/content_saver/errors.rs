//! Error types for per-post conversion
//!
//! Every variant carries the post id, so a failure can be reported without
//! the post it came from.

use std::path::PathBuf;
use thiserror::Error;

/// Why one post did not make it to disk
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The HTML pipeline itself failed
    #[error("Post {post_id}: conversion failed: {message}")]
    ParseFailure { post_id: u64, message: String },

    /// Conversion ran past the configured budget and was abandoned
    #[error("Post {post_id}: conversion timed out after {seconds}s")]
    Timeout { post_id: u64, seconds: u64 },

    /// The blocking task panicked or was cancelled
    #[error("Post {post_id}: conversion task failed: {message}")]
    TaskFailed { post_id: u64, message: String },

    /// Another post already owns the output path
    #[error("Post {post_id}: output path {} already used by post {existing_post_id}", .path.display())]
    PathCollision {
        post_id: u64,
        existing_post_id: u64,
        path: PathBuf,
    },

    /// Writing the document failed
    #[error("Post {post_id}: IO error: {source}")]
    Io {
        post_id: u64,
        #[source]
        source: std::io::Error,
    },
}

impl ConversionError {
    #[must_use]
    pub fn post_id(&self) -> u64 {
        match self {
            Self::ParseFailure { post_id, .. }
            | Self::Timeout { post_id, .. }
            | Self::TaskFailed { post_id, .. }
            | Self::PathCollision { post_id, .. }
            | Self::Io { post_id, .. } => *post_id,
        }
    }

    /// Whether re-running the same post could succeed
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Io { .. })
    }
}
