//! Language tags and construct signature tables
//!
//! The signature tables are plain configuration data: an ordered list of
//! `(tag, substrings)` pairs. Order is significant because signatures overlap
//! (a C# string literal can easily contain `WHERE `), so the more distinctive
//! languages are listed first and the permissive C# set last.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages a code block can be tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageTag {
    Csharp,
    Sql,
    Yaml,
    Javascript,
    Css,
    Xml,
    Python,
    Java,
    Vb,
    Fsharp,
    Bash,
    Powershell,
    As3,
    Plain,
    Unknown,
}

impl LanguageTag {
    /// Canonical lowercase name, as written into the highlight fence
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csharp => "csharp",
            Self::Sql => "sql",
            Self::Yaml => "yaml",
            Self::Javascript => "javascript",
            Self::Css => "css",
            Self::Xml => "xml",
            Self::Python => "python",
            Self::Java => "java",
            Self::Vb => "vb",
            Self::Fsharp => "fsharp",
            Self::Bash => "bash",
            Self::Powershell => "powershell",
            Self::As3 => "as3",
            Self::Plain => "plain",
            Self::Unknown => "unknown",
        }
    }

    /// Resolve a syntax-highlighter marker value (`brush: sql;`, `lang="vb"`)
    ///
    /// Matching is case-insensitive. Returns `None` for names outside the
    /// supported set, and for `plain`, which legacy posts used as "no idea".
    #[must_use]
    pub fn from_marker(name: &str) -> Option<Self> {
        let tag = match name.trim().to_ascii_lowercase().as_str() {
            "csharp" | "c#" | "c-sharp" => Self::Csharp,
            "sql" => Self::Sql,
            "yaml" => Self::Yaml,
            "jscript" | "javascript" | "js" => Self::Javascript,
            "bash" => Self::Bash,
            "powershell" => Self::Powershell,
            "xml" => Self::Xml,
            "css" => Self::Css,
            "python" => Self::Python,
            "java" => Self::Java,
            "vb" => Self::Vb,
            "fsharp" => Self::Fsharp,
            "as3" => Self::As3,
            _ => return None,
        };
        Some(tag)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the signature table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureSet {
    pub tag: LanguageTag,
    pub constructs: Vec<String>,
}

impl SignatureSet {
    pub fn new(tag: LanguageTag, constructs: &[&str]) -> Self {
        Self {
            tag,
            constructs: constructs.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    /// Case-insensitive containment check against an already lowercased haystack
    fn matches_lowercase(&self, haystack: &str) -> bool {
        self.constructs
            .iter()
            .any(|construct| haystack.contains(&construct.to_lowercase()))
    }
}

/// Ordered construct signature table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstructSignatures {
    sets: Vec<SignatureSet>,
}

impl ConstructSignatures {
    pub fn new(sets: Vec<SignatureSet>) -> Self {
        Self { sets }
    }

    /// Signature sets in priority order
    pub fn sets(&self) -> &[SignatureSet] {
        &self.sets
    }

    /// First language whose signature set has a construct contained in `text`
    pub fn detect(&self, text: &str) -> Option<LanguageTag> {
        let lower = text.to_lowercase();
        self.sets
            .iter()
            .find(|set| set.matches_lowercase(&lower))
            .map(|set| set.tag)
    }
}

impl Default for ConstructSignatures {
    fn default() -> Self {
        Self::new(vec![
            SignatureSet::new(
                LanguageTag::Sql,
                &[
                    "SELECT ",
                    "ALTER TABLE",
                    "ALTER DATABASE",
                    "CREATE PROCEDURE",
                    "TRUNCATE TABLE",
                    "WHERE ",
                    "INSERT ",
                ],
            ),
            SignatureSet::new(
                LanguageTag::Javascript,
                &["$(document)", "(function($)", "$('"],
            ),
            SignatureSet::new(LanguageTag::Css, &["position: absolute;"]),
            SignatureSet::new(LanguageTag::Yaml, &["- name:", "- task:", "parameters:"]),
            SignatureSet::new(
                LanguageTag::Csharp,
                &[
                    " class ",
                    "private void ",
                    "public override",
                    "()]",
                    "public static ",
                    "public struct ",
                    "public interface",
                    "public string ",
                    " == ",
                ],
            ),
        ])
    }
}
