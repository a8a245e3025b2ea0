//! Post export records
//!
//! The export is the WordPress REST shape the old blog was pulled with:
//! `{ "posts": [...], "tags": [...], "categories": [...] }`.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// `{ "rendered": "..." }` wrapper WordPress puts around titles and bodies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
    pub rendered: String,
}

/// One post as exported, with taxonomy ids still unresolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPost {
    pub id: u64,
    /// Local publish time, no offset
    pub date: NaiveDateTime,
    pub slug: String,
    #[serde(default)]
    pub link: String,
    pub title: Rendered,
    pub content: Rendered,
    #[serde(default)]
    pub categories: Vec<u64>,
    #[serde(default)]
    pub tags: Vec<u64>,
}

/// A tag or category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRecord {
    pub id: u64,
    pub name: String,
}

/// Everything pulled from the old blog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogExport {
    pub posts: Vec<RawPost>,
    #[serde(default)]
    pub tags: Vec<TermRecord>,
    #[serde(default)]
    pub categories: Vec<TermRecord>,
}

impl BlogExport {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse blog export JSON")
    }

    /// Load an export file from disk
    pub async fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read blog export {}", path.display()))?;
        let export = Self::from_json_str(&contents)?;
        tracing::info!(
            "Loaded {} posts, {} tags, {} categories from {}",
            export.posts.len(),
            export.tags.len(),
            export.categories.len(),
            path.display()
        );
        Ok(export)
    }
}
