// blog-transfer: migrate a WordPress post export into Hugo markdown.
//
// Usage: blog-transfer <export.json> [config.json]

use anyhow::{Context, Result, bail};
use blog_transfer::MigrationConfig;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let mut args = std::env::args_os().skip(1);
    let Some(export_path) = args.next().map(PathBuf::from) else {
        bail!("usage: blog-transfer <export.json> [config.json]");
    };

    let config = match args.next().map(PathBuf::from) {
        Some(config_path) => MigrationConfig::from_json_file(&config_path)
            .await
            .with_context(|| format!("Invalid config {}", config_path.display()))?,
        None => MigrationConfig::default(),
    };

    tracing::info!(
        "Migrating {} into {}",
        export_path.display(),
        config.output_dir().display()
    );

    let summary = blog_transfer::migrate(&export_path, config).await?;

    if summary.failed() > 0 {
        bail!("{} posts failed to convert", summary.failed());
    }
    Ok(())
}
