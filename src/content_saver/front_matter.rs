//! Hugo front matter for migrated posts.
//!
//! The header is written by hand rather than through a YAML serializer: Hugo
//! themes on the new site expect exactly this layout, and every value has
//! already been through [`sanitize`], so nothing needs quoting beyond the title.

use chrono::NaiveDateTime;
use std::fmt;

use crate::blog::BlogPost;
use crate::utils::{
    DEFAULT_CATEGORY, DEFAULT_UTC_OFFSET, UNCATEGORIZED_TAG, sanitize,
};

/// Site-wide values that end up in every header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatterSettings {
    pub utc_offset: String,
    pub draft: bool,
    pub default_category: String,
}

impl Default for FrontMatterSettings {
    fn default() -> Self {
        Self {
            utc_offset: DEFAULT_UTC_OFFSET.to_string(),
            draft: false,
            default_category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

/// Header of one migrated post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    pub date: NaiveDateTime,
    pub utc_offset: String,
    pub draft: bool,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
}

impl FrontMatter {
    pub fn for_post(post: &BlogPost, settings: &FrontMatterSettings) -> Self {
        let categories = sanitize_categories(&post.categories, &settings.default_category);
        let tags = sanitize_tags(&post.tags, &categories);

        Self {
            title: sanitize(&post.title),
            date: post.published,
            utc_offset: settings.utc_offset.clone(),
            draft: settings.draft,
            tags,
            categories,
        }
    }
}

impl fmt::Display for FrontMatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---")?;
        writeln!(f, "title: \"{}\"", self.title)?;
        writeln!(f, "description: \"\"")?;
        writeln!(
            f,
            "date: {}{}",
            self.date.format("%Y-%m-%dT%H:%M:%S"),
            self.utc_offset
        )?;
        writeln!(f, "draft: {}", self.draft)?;
        writeln!(f, "tags: [{}]", self.tags.join(","))?;
        writeln!(f, "categories: [{}]", self.categories.join(","))?;
        writeln!(f, "---")
    }
}

/// Front matter followed by the body, newline terminated
pub fn compose_document(front_matter: &FrontMatter, body: &str) -> String {
    let body = body.trim_end_matches('\n');
    format!("{front_matter}{body}\n")
}

/// Sanitized, deduplicated categories; `default` when none survive
pub fn sanitize_categories(categories: &[String], default: &str) -> Vec<String> {
    let sanitized = sanitize_terms(categories, |_| true);
    if sanitized.is_empty() {
        vec![sanitize(default)]
    } else {
        sanitized
    }
}

/// Sanitized, deduplicated tags without the CMS placeholder; the categories
/// when none survive
pub fn sanitize_tags(tags: &[String], categories: &[String]) -> Vec<String> {
    let sanitized = sanitize_terms(tags, |tag| !tag.eq_ignore_ascii_case(UNCATEGORIZED_TAG));
    if sanitized.is_empty() {
        categories.to_vec()
    } else {
        sanitized
    }
}

fn sanitize_terms(terms: &[String], keep: impl Fn(&str) -> bool) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(terms.len());
    for term in terms {
        let clean = sanitize(term).trim().to_string();
        if clean.is_empty() || !keep(&clean) || result.contains(&clean) {
            continue;
        }
        result.push(clean);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn post(categories: &[&str], tags: &[&str]) -> BlogPost {
        BlogPost {
            id: 42,
            title: "Using \"async\" in C#: part 2".to_string(),
            slug: "using-async".to_string(),
            published: NaiveDate::from_ymd_opt(2013, 7, 9)
                .unwrap()
                .and_hms_opt(14, 5, 37)
                .unwrap(),
            html: String::new(),
            categories: categories.iter().map(|s| s.to_string()).collect(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_render_header() {
        let front = FrontMatter::for_post(
            &post(&["Programming"], &["Async", "C#"]),
            &FrontMatterSettings::default(),
        );
        assert_eq!(
            front.to_string(),
            "---\n\
             title: \"Using async in C part 2\"\n\
             description: \"\"\n\
             date: 2013-07-09T14:05:37+02:00\n\
             draft: false\n\
             tags: [Async,C]\n\
             categories: [Programming]\n\
             ---\n"
        );
    }

    #[test]
    fn test_defaults_when_empty() {
        let front = FrontMatter::for_post(
            &post(&["!!!"], &["uncategorized", "Uncategorized"]),
            &FrontMatterSettings::default(),
        );
        assert_eq!(front.categories, vec!["General"]);
        assert_eq!(front.tags, vec!["General"]);
    }

    #[test]
    fn test_tags_deduplicated_after_sanitizing() {
        assert_eq!(
            sanitize_tags(&["C#".to_string(), "C".to_string(), "F#".to_string()], &[]),
            vec!["C", "F"]
        );
    }

    #[test]
    fn test_settings_are_applied() {
        let settings = FrontMatterSettings {
            utc_offset: "Z".to_string(),
            draft: true,
            default_category: "Archive".to_string(),
        };
        let rendered = FrontMatter::for_post(&post(&[], &[]), &settings).to_string();
        assert!(rendered.contains("date: 2013-07-09T14:05:37Z\n"));
        assert!(rendered.contains("draft: true\n"));
        assert!(rendered.contains("tags: [Archive]\n"));
        assert!(rendered.contains("categories: [Archive]\n"));
    }

    #[test]
    fn test_compose_document() {
        let front = FrontMatter::for_post(&post(&["A"], &[]), &FrontMatterSettings::default());
        let doc = compose_document(&front, "Body text\n\n");
        assert!(doc.starts_with("---\ntitle:"));
        assert!(doc.ends_with("---\nBody text\n"));
    }
}
