//! Tag and category resolution.

use std::collections::{HashMap, HashSet};

use super::export::{BlogExport, RawPost, TermRecord};

/// Id → name lookup plus the set of tags worth keeping
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    categories: HashMap<u64, String>,
    tags: HashMap<u64, String>,
    /// Lowercased names of tags used on more than one post
    meaningful_tags: HashSet<String>,
}

impl Taxonomy {
    pub fn new(export: &BlogExport) -> Self {
        let categories = index_terms(&export.categories);
        let tags = index_terms(&export.tags);

        let mut usage: HashMap<u64, usize> = HashMap::new();
        for id in export.posts.iter().flat_map(|post| &post.tags) {
            *usage.entry(*id).or_default() += 1;
        }

        let meaningful_tags = usage
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .filter_map(|(id, _)| tags.get(&id))
            .map(|name| name.to_lowercase())
            .collect();

        Self {
            categories,
            tags,
            meaningful_tags,
        }
    }

    /// Whether a tag is used on more than one post (case-insensitive)
    pub fn is_meaningful_tag(&self, name: &str) -> bool {
        self.meaningful_tags.contains(&name.to_lowercase())
    }

    /// Category names of `post`, in export order
    pub fn category_names(&self, post: &RawPost) -> Vec<String> {
        resolve(&self.categories, &post.categories, post.id, "category")
    }

    /// Names of the meaningful tags on `post`, in export order
    pub fn tag_names(&self, post: &RawPost) -> Vec<String> {
        resolve(&self.tags, &post.tags, post.id, "tag")
            .into_iter()
            .filter(|name| self.is_meaningful_tag(name))
            .collect()
    }
}

fn index_terms(terms: &[TermRecord]) -> HashMap<u64, String> {
    terms
        .iter()
        .map(|term| (term.id, html_escape::decode_html_entities(&term.name).into_owned()))
        .collect()
}

fn resolve(names: &HashMap<u64, String>, ids: &[u64], post_id: u64, kind: &str) -> Vec<String> {
    ids.iter()
        .filter_map(|id| {
            let name = names.get(id);
            if name.is_none() {
                tracing::warn!("Post {}: unknown {} id {}, skipped", post_id, kind, id);
            }
            name.cloned()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::export::Rendered;
    use chrono::NaiveDate;

    fn post(id: u64, categories: Vec<u64>, tags: Vec<u64>) -> RawPost {
        RawPost {
            id,
            date: NaiveDate::from_ymd_opt(2020, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            slug: format!("post-{id}"),
            link: String::new(),
            title: Rendered::default(),
            content: Rendered::default(),
            categories,
            tags,
        }
    }

    fn term(id: u64, name: &str) -> TermRecord {
        TermRecord {
            id,
            name: name.to_string(),
        }
    }

    fn export() -> BlogExport {
        BlogExport {
            posts: vec![
                post(1, vec![10], vec![100, 101]),
                post(2, vec![10, 11], vec![100]),
                post(3, vec![99], vec![102, 555]),
            ],
            tags: vec![term(100, "Azure"), term(101, "once"), term(102, "AZURE")],
            categories: vec![term(10, "Programming"), term(11, "Tools &amp; Tips")],
        }
    }

    #[test]
    fn test_meaningful_tags() {
        let taxonomy = Taxonomy::new(&export());
        assert!(taxonomy.is_meaningful_tag("azure"));
        assert!(!taxonomy.is_meaningful_tag("once"));
    }

    #[test]
    fn test_tag_names_case_insensitive() {
        let export = export();
        let taxonomy = Taxonomy::new(&export);
        assert_eq!(taxonomy.tag_names(&export.posts[0]), vec!["Azure"]);
        // 102 is used once, but shares its name with a meaningful tag
        assert_eq!(taxonomy.tag_names(&export.posts[2]), vec!["AZURE"]);
    }

    #[test]
    fn test_category_names_skip_unknown() {
        let export = export();
        let taxonomy = Taxonomy::new(&export);
        assert_eq!(
            taxonomy.category_names(&export.posts[1]),
            vec!["Programming", "Tools & Tips"]
        );
        assert!(taxonomy.category_names(&export.posts[2]).is_empty());
    }
}
