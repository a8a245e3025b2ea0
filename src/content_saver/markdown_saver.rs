use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::Datelike;
use tokio::io::AsyncWriteExt;

use crate::blog::BlogPost;

use super::errors::ConversionError;
use super::markdown_converter::ConversionDiagnostic;

/// `<prefix>/<year>/<month>/<slug>.md`, relative to the output directory
///
/// The slug goes through `sanitize_filename`; an empty result falls back to
/// `post-<id>`.
pub fn relative_path(post: &BlogPost, prefix: &str) -> PathBuf {
    let slug = sanitize_filename::sanitize(&post.slug);
    let slug = if slug.trim().is_empty() {
        format!("post-{}", post.id)
    } else {
        slug
    };

    let mut path = PathBuf::new();
    if !prefix.is_empty() {
        path.push(prefix);
    }
    path.push(post.published.year().to_string());
    path.push(format!("{:02}", post.published.month()));
    path.push(format!("{slug}.md"));
    path
}

/// Output paths claimed so far in a run
#[derive(Debug, Default)]
pub struct PathRegistry {
    claimed: HashMap<PathBuf, u64>,
}

impl PathRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `path` for `post_id`
    ///
    /// Fails when a different post already holds the path. Claiming the same
    /// path twice for the same post is allowed.
    pub fn claim(&mut self, path: &Path, post_id: u64) -> Result<(), ConversionError> {
        match self.claimed.get(path) {
            Some(&existing_post_id) if existing_post_id != post_id => {
                Err(ConversionError::PathCollision {
                    post_id,
                    existing_post_id,
                    path: path.to_path_buf(),
                })
            }
            Some(_) => Ok(()),
            None => {
                self.claimed.insert(path.to_path_buf(), post_id);
                Ok(())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}

/// Write a finished document under `output_dir`, creating parent directories
///
/// # Returns
///
/// * The absolute (joined) path written
pub async fn save_markdown_document(
    output_dir: &Path,
    relative: &Path,
    document: &str,
) -> std::io::Result<PathBuf> {
    let path = output_dir.join(relative);

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&path, document).await?;

    tracing::debug!("Saved {} ({} bytes)", path.display(), document.len());
    Ok(path)
}

/// Append the diagnostics of one post to the review log
///
/// One line per diagnostic: `post <id> <relative path>: <diagnostic>`.
pub async fn append_review_log(
    log_path: &Path,
    post_id: u64,
    relative: &Path,
    diagnostics: &[ConversionDiagnostic],
) -> std::io::Result<()> {
    if diagnostics.is_empty() {
        return Ok(());
    }

    if let Some(parent) = log_path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }

    let mut entry = String::new();
    for diagnostic in diagnostics {
        let line = diagnostic.to_string().replace('\n', " ");
        entry.push_str(&format!("post {} {}: {}\n", post_id, relative.display(), line));
    }

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .await?;
    file.write_all(entry.as_bytes()).await?;
    file.flush().await
}
