pub mod blog;
pub mod config;
pub mod content_saver;
pub mod utils;

pub use blog::{BlogExport, BlogPost, Taxonomy};
pub use config::MigrationConfig;
pub use content_saver::markdown_converter::{
    ConversionDiagnostic, ConversionOptions, ConvertedBody, LanguageClassifier, LanguageTag,
    convert_post_body, convert_post_body_async, postprocess,
};
pub use content_saver::{ConversionError, ConvertedPost, MigrationRunner, MigrationSummary};
pub use utils::sanitize;

/// Load an export, resolve its posts and migrate them all
pub async fn migrate(
    export_path: &std::path::Path,
    config: MigrationConfig,
) -> anyhow::Result<MigrationSummary> {
    let posts = BlogExport::load(export_path).await?.into_posts();
    let runner = MigrationRunner::new(config);
    Ok(runner.run(posts).await)
}
