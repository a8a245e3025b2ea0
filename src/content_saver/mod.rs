//! Turning posts into Hugo markdown files

// Module declarations
pub mod batch;
pub mod errors;
pub mod front_matter;
pub mod markdown_converter;
mod markdown_saver;

// Re-export public API from batch module
pub use batch::{ConvertedPost, MigrationRunner, MigrationSummary, run_blocking_with_timeout};

pub use errors::ConversionError;

pub use front_matter::{FrontMatter, FrontMatterSettings, compose_document};

// Re-export public API from markdown_saver module
pub use markdown_saver::{
    PathRegistry, append_review_log, relative_path, save_markdown_document,
};
