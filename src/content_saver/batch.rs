//! Concurrent conversion of a whole export.
//!
//! Posts are converted on the blocking pool, at most `max_concurrent_posts` at
//! a time, each under its own timeout. A failing post is logged and counted;
//! it never stops the batch.

use futures::{StreamExt, stream};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::blog::BlogPost;
use crate::config::MigrationConfig;

use super::errors::ConversionError;
use super::front_matter::{FrontMatter, FrontMatterSettings, compose_document};
use super::markdown_converter::{
    ConversionDiagnostic, ConversionOptions, LanguageTag, convert_post_body,
};
use super::markdown_saver::{
    PathRegistry, append_review_log, relative_path, save_markdown_document,
};

/// A converted post, not yet written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedPost {
    pub post_id: u64,
    pub relative_path: PathBuf,
    /// Front matter plus markdown body
    pub document: String,
    pub languages: Vec<LanguageTag>,
    pub diagnostics: Vec<ConversionDiagnostic>,
}

/// Outcome of a batch
#[derive(Debug, Default)]
pub struct MigrationSummary {
    pub converted: usize,
    pub failures: Vec<ConversionError>,
    /// Diagnostics of converted posts, keyed by post id
    pub diagnostics: Vec<(u64, ConversionDiagnostic)>,
    /// Fenced blocks per language
    pub languages: HashMap<LanguageTag, usize>,
}

impl MigrationSummary {
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    fn record(&mut self, post: ConvertedPost) {
        self.converted += 1;
        for tag in post.languages {
            *self.languages.entry(tag).or_default() += 1;
        }
        self.diagnostics.extend(
            post.diagnostics
                .into_iter()
                .map(|diagnostic| (post.post_id, diagnostic)),
        );
    }
}

impl fmt::Display for MigrationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} converted, {} failed, {} need review",
            self.converted,
            self.failed(),
            self.diagnostics.len()
        )
    }
}

/// Run `job` on the blocking pool, giving up after `timeout`
///
/// On timeout the task is abandoned; it keeps its thread until it returns.
pub async fn run_blocking_with_timeout<T, F>(
    post_id: u64,
    timeout: Duration,
    job: F,
) -> Result<T, ConversionError>
where
    T: Send + 'static,
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
{
    let task = tokio::task::spawn_blocking(job);

    match tokio::time::timeout(timeout, task).await {
        Err(_) => Err(ConversionError::Timeout {
            post_id,
            seconds: timeout.as_secs(),
        }),
        Ok(Err(join_error)) => Err(ConversionError::TaskFailed {
            post_id,
            message: join_error.to_string(),
        }),
        Ok(Ok(Err(e))) => Err(ConversionError::ParseFailure {
            post_id,
            message: format!("{e:#}"),
        }),
        Ok(Ok(Ok(value))) => Ok(value),
    }
}

/// Converts and writes posts according to a [`MigrationConfig`]
#[derive(Debug, Clone)]
pub struct MigrationRunner {
    config: Arc<MigrationConfig>,
    options: Arc<ConversionOptions>,
    front_matter: Arc<FrontMatterSettings>,
}

impl MigrationRunner {
    pub fn new(config: MigrationConfig) -> Self {
        let options = Arc::new(config.conversion().clone());
        let front_matter = Arc::new(config.front_matter_settings());
        Self {
            config: Arc::new(config),
            options,
            front_matter,
        }
    }

    pub fn config(&self) -> &MigrationConfig {
        &self.config
    }

    /// Convert one post into its final document, without writing it
    pub async fn convert_post(
        &self,
        post: BlogPost,
        relative_path: PathBuf,
    ) -> Result<ConvertedPost, ConversionError> {
        let post_id = post.id;
        let options = Arc::clone(&self.options);
        let settings = Arc::clone(&self.front_matter);

        run_blocking_with_timeout(post_id, self.config.conversion_timeout(), move || {
            let body = convert_post_body(&post.html, &options)?;
            let front_matter = FrontMatter::for_post(&post, &settings);
            Ok(ConvertedPost {
                post_id,
                relative_path,
                document: compose_document(&front_matter, &body.markdown),
                languages: body.languages,
                diagnostics: body.diagnostics,
            })
        })
        .await
    }

    /// Convert one post and write it under the output directory
    pub async fn migrate_post(
        &self,
        post: BlogPost,
        relative_path: PathBuf,
    ) -> Result<ConvertedPost, ConversionError> {
        let converted = self.convert_post(post, relative_path).await?;

        save_markdown_document(
            self.config.output_dir(),
            &converted.relative_path,
            &converted.document,
        )
        .await
        .map_err(|source| ConversionError::Io {
            post_id: converted.post_id,
            source,
        })?;

        Ok(converted)
    }

    /// Convert and write every post
    ///
    /// Output paths are claimed in input order before any conversion starts,
    /// so with newest-first input the newest post keeps a contested path.
    pub async fn run(&self, posts: Vec<BlogPost>) -> MigrationSummary {
        let mut summary = MigrationSummary::default();
        let mut registry = PathRegistry::new();
        let mut jobs = Vec::with_capacity(posts.len());

        for post in posts {
            let path = relative_path(&post, self.config.path_prefix());
            match registry.claim(&path, post.id) {
                Ok(()) => jobs.push((post, path)),
                Err(e) => {
                    tracing::error!("{}", e);
                    summary.failures.push(e);
                }
            }
        }

        tracing::info!(
            "Converting {} posts ({} at a time)",
            jobs.len(),
            self.config.max_concurrent_posts()
        );

        let mut results = stream::iter(jobs)
            .map(|(post, path)| self.migrate_post(post, path))
            .buffer_unordered(self.config.max_concurrent_posts());

        while let Some(result) = results.next().await {
            match result {
                Ok(converted) => {
                    tracing::info!(
                        "Converted post {} -> {}",
                        converted.post_id,
                        converted.relative_path.display()
                    );
                    self.write_review_entries(&converted).await;
                    summary.record(converted);
                }
                Err(e) => {
                    tracing::error!("{}", e);
                    summary.failures.push(e);
                }
            }
        }

        tracing::info!("Migration finished: {}", summary);
        summary
    }

    async fn write_review_entries(&self, converted: &ConvertedPost) {
        let Some(log_path) = self.config.review_log() else {
            return;
        };
        if let Err(e) = append_review_log(
            log_path,
            converted.post_id,
            &converted.relative_path,
            &converted.diagnostics,
        )
        .await
        {
            tracing::warn!(
                "Failed to append post {} to review log {}: {}",
                converted.post_id,
                log_path.display(),
                e
            );
        }
    }
}
