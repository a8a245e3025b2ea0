//! Language inference for code blocks
//!
//! Classification is an ordered list of strategies. Each strategy looks at a
//! [`CodeBlock`] and either names a language or passes; the first strategy
//! with an answer wins:
//!
//! 1. [`ExplicitMarker`] - `brush: sql;` classes and `pre lang="..."` attributes
//! 2. [`ConstructSignature`] - literal constructs from [`ConstructSignatures`]
//! 3. [`StructuralFallback`] - escaped markup, or enough `obj.Member` shapes
//!
//! When nothing matches the result is [`LanguageTag::Unknown`]; resolving that
//! to a default is the caller's policy, not the classifier's.

use regex::Regex;
use std::sync::LazyLock;

use super::language_patterns::{ConstructSignatures, LanguageTag};

static BRUSH_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"brush:\s*(?P<lang>[^;"'<>]+?)\s*;"#)
        .expect("BRUSH_MARKER: hardcoded regex is valid")
});

static PRE_LANG_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"pre\s[^>]*?\blang\s*=\s*"(?P<lang>[^"]*)""#)
        .expect("PRE_LANG_MARKER: hardcoded regex is valid")
});

static DOTTED_ACCESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w\.\w").expect("DOTTED_ACCESS: hardcoded regex is valid"));

static BR_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>").expect("BR_TAG: hardcoded regex is valid")
});

static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("ANY_TAG: hardcoded regex is valid"));

/// More than this many `a.b` shapes makes an otherwise silent block C#
const DOTTED_ACCESS_THRESHOLD: usize = 2;

/// One embedded snippet, materialized from the parsed document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Serialized element including its own tag
    pub outer_html: String,
    /// Serialized children
    pub inner_html: String,
    /// Decoded text with `<br>` turned into line breaks
    pub text: String,
}

impl CodeBlock {
    pub fn new(outer_html: impl Into<String>, inner_html: impl Into<String>) -> Self {
        let inner_html = inner_html.into();
        let text = markup_to_text(&inner_html);
        Self {
            outer_html: outer_html.into(),
            inner_html,
            text,
        }
    }

    /// True when there is nothing but whitespace to fence
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Turn serialized markup into the text a reader of the old post saw
///
/// Line-break tags become real line breaks, every other tag is dropped and
/// entities are decoded.
pub fn markup_to_text(markup: &str) -> String {
    let with_breaks = BR_TAG.replace_all(markup, "\n");
    let without_tags = ANY_TAG.replace_all(&with_breaks, "");
    html_escape::decode_html_entities(&without_tags).into_owned()
}

/// Result of a successful classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageMatch {
    pub tag: LanguageTag,
    /// Text written into the fence. Verbatim marker text for explicit markers.
    pub label: String,
    /// Name of the strategy that produced this match
    pub strategy: &'static str,
}

impl LanguageMatch {
    pub fn new(tag: LanguageTag, strategy: &'static str) -> Self {
        Self {
            tag,
            label: tag.as_str().to_string(),
            strategy,
        }
    }

    pub fn unknown() -> Self {
        Self::new(LanguageTag::Unknown, "none")
    }

    pub fn is_unknown(&self) -> bool {
        self.tag == LanguageTag::Unknown
    }
}

/// A single classification heuristic
pub trait ClassificationStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn classify(&self, block: &CodeBlock) -> Option<LanguageMatch>;
}

/// Legacy syntax-highlighter markers in the block's own markup
#[derive(Debug, Default, Clone, Copy)]
pub struct ExplicitMarker;

impl ExplicitMarker {
    fn resolve(&self, raw: &str) -> Option<LanguageMatch> {
        let tag = LanguageTag::from_marker(raw)?;
        Some(LanguageMatch {
            tag,
            label: raw.trim().to_string(),
            strategy: self.name(),
        })
    }
}

impl ClassificationStrategy for ExplicitMarker {
    fn name(&self) -> &'static str {
        "explicit-marker"
    }

    fn classify(&self, block: &CodeBlock) -> Option<LanguageMatch> {
        let brush = BRUSH_MARKER
            .captures(&block.outer_html)
            .and_then(|caps| self.resolve(&caps["lang"]));
        if brush.is_some() {
            return brush;
        }

        PRE_LANG_MARKER
            .captures(&block.outer_html)
            .and_then(|caps| self.resolve(&caps["lang"]))
    }
}

/// Literal construct search over the block text
#[derive(Debug, Clone)]
pub struct ConstructSignature {
    signatures: ConstructSignatures,
}

impl ConstructSignature {
    pub fn new(signatures: ConstructSignatures) -> Self {
        Self { signatures }
    }
}

impl ClassificationStrategy for ConstructSignature {
    fn name(&self) -> &'static str {
        "construct-signature"
    }

    fn classify(&self, block: &CodeBlock) -> Option<LanguageMatch> {
        self.signatures
            .detect(&block.text)
            .map(|tag| LanguageMatch::new(tag, self.name()))
    }
}

/// Shape-based last resort
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuralFallback;

impl ClassificationStrategy for StructuralFallback {
    fn name(&self) -> &'static str {
        "structural-fallback"
    }

    fn classify(&self, block: &CodeBlock) -> Option<LanguageMatch> {
        if block.outer_html.contains("&lt;") && block.outer_html.contains("&gt;") {
            return Some(LanguageMatch::new(LanguageTag::Xml, self.name()));
        }

        let dotted = DOTTED_ACCESS.find_iter(&block.text).count();
        (dotted > DOTTED_ACCESS_THRESHOLD)
            .then(|| LanguageMatch::new(LanguageTag::Csharp, self.name()))
    }
}

/// Ordered cascade of classification strategies
pub struct LanguageClassifier {
    strategies: Vec<Box<dyn ClassificationStrategy>>,
}

impl LanguageClassifier {
    /// Standard cascade: explicit marker, construct signatures, structure
    pub fn new(signatures: ConstructSignatures) -> Self {
        Self::with_strategies(vec![
            Box::new(ExplicitMarker),
            Box::new(ConstructSignature::new(signatures)),
            Box::new(StructuralFallback),
        ])
    }

    pub fn with_strategies(strategies: Vec<Box<dyn ClassificationStrategy>>) -> Self {
        Self { strategies }
    }

    /// Classify a block; [`LanguageTag::Unknown`] when no strategy matched
    pub fn classify(&self, block: &CodeBlock) -> LanguageMatch {
        self.strategies
            .iter()
            .find_map(|strategy| strategy.classify(block))
            .unwrap_or_else(LanguageMatch::unknown)
    }
}

impl Default for LanguageClassifier {
    fn default() -> Self {
        Self::new(ConstructSignatures::default())
    }
}

impl std::fmt::Debug for LanguageClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.strategies.iter().map(|s| s.name()).collect();
        f.debug_struct("LanguageClassifier")
            .field("strategies", &names)
            .finish()
    }
}
