//! Blog export loading and post resolution

pub mod export;
pub mod taxonomy;

use chrono::NaiveDateTime;

pub use export::{BlogExport, RawPost, Rendered, TermRecord};
pub use taxonomy::Taxonomy;

/// A post ready for conversion: taxonomy resolved, title decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub published: NaiveDateTime,
    pub html: String,
    pub categories: Vec<String>,
    /// Already filtered to meaningful tags
    pub tags: Vec<String>,
}

impl BlogPost {
    pub fn resolve(raw: RawPost, taxonomy: &Taxonomy) -> Self {
        let categories = taxonomy.category_names(&raw);
        let tags = taxonomy.tag_names(&raw);
        Self {
            id: raw.id,
            title: html_escape::decode_html_entities(&raw.title.rendered).into_owned(),
            slug: raw.slug,
            published: raw.date,
            html: raw.content.rendered,
            categories,
            tags,
        }
    }
}

impl BlogExport {
    /// Resolve every post, newest first
    pub fn into_posts(self) -> Vec<BlogPost> {
        let taxonomy = Taxonomy::new(&self);
        let mut posts: Vec<BlogPost> = self
            .posts
            .into_iter()
            .map(|raw| BlogPost::resolve(raw, &taxonomy))
            .collect();
        posts.sort_by(|a, b| b.published.cmp(&a.published));
        posts
    }
}
