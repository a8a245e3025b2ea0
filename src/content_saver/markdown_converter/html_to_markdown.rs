//! Code-block annotation and the htmd conversion step.
//!
//! # Architecture
//!
//! 1. **Annotation**: every non-blank `<pre>` is classified and replaced by a
//!    `<pre data-fenced>` whose text is a complete Hugo `highlight` block
//! 2. **htmd conversion**: one pass over the whole document; the fenced blocks
//!    pass through verbatim, everything else is generic markup
//!
//! The output is trimmed of leading/trailing line breaks and handed to
//! [`markdown_postprocessing`](super::markdown_postprocessing).

use anyhow::{Context, Result, anyhow};
use kuchiki::NodeRef;

use super::ConversionOptions;
use super::custom_handlers::language_inference::{CodeBlock, LanguageClassifier, LanguageMatch};
use super::custom_handlers::language_patterns::LanguageTag;
use super::custom_handlers::{FENCED_ATTR, create_converter};
use super::diagnostics::ConversionDiagnostic;
use super::html_preprocessing::dom_util::{
    inner_html, parse_document, replace_node, serialize_document,
};
use crate::utils::safe_truncate_chars;

/// Hugo `highlight` directive enabling table-style line numbers
pub const LINE_NUMBER_DIRECTIVE: &str = "linenos=table,linenostart=1";

const EXCERPT_CHARS: usize = 200;

/// Collapse every run of two or more blank lines into a single blank line
///
/// Whitespace-only lines count as blank and are emptied.
pub fn collapse_blank_line_runs(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut previous_blank = false;

    for line in text.lines() {
        let blank = line.trim().is_empty();
        if blank && previous_blank {
            continue;
        }
        lines.push(if blank { "" } else { line });
        previous_blank = blank;
    }

    lines.join("\n")
}

/// Render a Hugo `highlight` block around `code`
pub fn fence_code_block(label: &str, code: &str, line_numbers: bool) -> String {
    let body = collapse_blank_line_runs(code);
    let body = body.trim_start_matches('\n').trim_end();
    let open = if line_numbers {
        format!("{{{{< highlight {label} \"{LINE_NUMBER_DIRECTIVE}\" >}}}}")
    } else {
        format!("{{{{< highlight {label} >}}}}")
    };
    format!("{open}\n{body}\n{{{{< / highlight >}}}}")
}

/// One code block after classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedBlock {
    /// What the classifier said
    pub detected: LanguageMatch,
    /// Tag actually written into the fence
    pub resolved: LanguageTag,
}

/// Document with its code blocks replaced by fenced representations
#[derive(Debug, Clone, Default)]
pub struct AnnotatedHtml {
    pub html: String,
    pub blocks: Vec<AnnotatedBlock>,
    pub diagnostics: Vec<ConversionDiagnostic>,
}

impl AnnotatedHtml {
    /// Resolved language of each fenced block, in document order
    pub fn languages(&self) -> Vec<LanguageTag> {
        self.blocks.iter().map(|block| block.resolved).collect()
    }
}

/// Classifies code blocks and drives htmd
///
/// Holds the options it was built from, so one converter always runs the
/// pipeline the same way.
#[derive(Debug)]
pub struct MarkdownConverter {
    classifier: LanguageClassifier,
    options: ConversionOptions,
}

impl MarkdownConverter {
    pub fn new(options: &ConversionOptions) -> Self {
        Self {
            classifier: LanguageClassifier::new(options.signatures.clone()),
            options: options.clone(),
        }
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: LanguageClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Replace every `<pre>` with its fenced representation
    pub fn annotate_code_blocks(&self, html: &str) -> Result<AnnotatedHtml> {
        if !html.to_ascii_lowercase().contains("<pre") {
            return Ok(AnnotatedHtml {
                html: html.to_string(),
                ..Default::default()
            });
        }

        let document = parse_document(html);
        let pre_nodes: Vec<NodeRef> = document
            .select("pre")
            .map_err(|()| anyhow!("Invalid CSS selector: pre"))?
            .map(|pre| pre.as_node().clone())
            .filter(|node| !has_pre_ancestor(node))
            .collect();

        let mut annotated = AnnotatedHtml::default();

        for node in pre_nodes {
            let block = CodeBlock::new(node.to_string(), inner_html(&node));
            if block.is_blank() {
                continue;
            }

            let detected = self.classifier.classify(&block);
            let (resolved, label) = if detected.is_unknown() {
                let fallback = self.options.fallback_language;
                let excerpt = safe_truncate_chars(block.text.trim(), EXCERPT_CHARS).to_string();
                tracing::error!(
                    "Unable to find language for code block, using {}: {}",
                    fallback,
                    excerpt
                );
                annotated
                    .diagnostics
                    .push(ConversionDiagnostic::ClassificationAmbiguous {
                        excerpt,
                        fallback,
                    });
                (fallback, fallback.as_str().to_string())
            } else {
                tracing::debug!(
                    "Code block classified as {} by {}",
                    detected.label,
                    detected.strategy
                );
                (detected.tag, detected.label.clone())
            };

            let fenced = fence_code_block(&label, &block.text, self.options.line_numbers);
            let replacement = format!(
                "<pre {FENCED_ATTR}=\"{}\">{}</pre>",
                resolved,
                html_escape::encode_text(&fenced)
            );
            replace_node(&node, &replacement)?;

            annotated.blocks.push(AnnotatedBlock { detected, resolved });
        }

        annotated.html = serialize_document(&document)?;
        Ok(annotated)
    }

    /// Run htmd over the (annotated) document
    ///
    /// Leading and trailing line breaks are trimmed.
    pub fn convert_sync(&self, html: &str) -> Result<String> {
        let markdown = create_converter()
            .convert(html)
            .context("htmd could not convert the document")?;
        Ok(markdown.trim_matches(|c| c == '\n' || c == '\r').to_string())
    }
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::new(&ConversionOptions::default())
    }
}

fn has_pre_ancestor(node: &NodeRef) -> bool {
    node.ancestors().any(|ancestor| {
        ancestor
            .as_element()
            .is_some_and(|element| &*element.name.local == "pre")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_blank_line_runs() {
        assert_eq!(collapse_blank_line_runs("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_line_runs("a\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_line_runs("a\n  \n\t\nb"), "a\n\nb");
        assert_eq!(collapse_blank_line_runs("a\r\n\r\n\r\nb"), "a\n\nb");
    }

    #[test]
    fn test_fence_code_block() {
        assert_eq!(
            fence_code_block("sql", "\nSELECT 1\n\n\n\nFROM t\n\n", true),
            "{{< highlight sql \"linenos=table,linenostart=1\" >}}\nSELECT 1\n\nFROM t\n{{< / highlight >}}"
        );
        assert_eq!(
            fence_code_block("xml", "<a/>", false),
            "{{< highlight xml >}}\n<a/>\n{{< / highlight >}}"
        );
    }

    #[test]
    fn test_annotate_marks_every_block() {
        let converter = MarkdownConverter::default();
        let html = r#"<p>x</p><pre class="brush: sql;">SELECT 1</pre><pre>   </pre><pre>hello</pre>"#;
        let annotated = converter.annotate_code_blocks(html).unwrap();

        assert_eq!(annotated.languages(), vec![LanguageTag::Sql, LanguageTag::Csharp]);
        assert_eq!(annotated.html.matches(FENCED_ATTR).count(), 2);
        assert_eq!(annotated.diagnostics.len(), 1);
        assert!(matches!(
            &annotated.diagnostics[0],
            ConversionDiagnostic::ClassificationAmbiguous { excerpt, fallback: LanguageTag::Csharp }
                if excerpt == "hello"
        ));
    }

    #[test]
    fn test_fallback_language_is_configurable() {
        let options = ConversionOptions {
            fallback_language: LanguageTag::Plain,
            ..ConversionOptions::default()
        };
        let converter = MarkdownConverter::new(&options);
        let annotated = converter.annotate_code_blocks("<pre>hello</pre>").unwrap();
        assert_eq!(annotated.languages(), vec![LanguageTag::Plain]);
        assert!(annotated.html.contains("highlight plain"), "{}", annotated.html);
    }

    #[test]
    fn test_escaped_markup_gets_real_line_breaks() {
        let converter = MarkdownConverter::default();
        let html = "<pre>&lt;root&gt;<br>&lt;child /&gt;<br>&lt;/root&gt;</pre>";
        let annotated = converter.annotate_code_blocks(html).unwrap();
        let md = converter.convert_sync(&annotated.html).unwrap();

        assert_eq!(annotated.languages(), vec![LanguageTag::Xml]);
        assert!(
            md.contains("<root>\n<child />\n</root>"),
            "Got: {md}"
        );
    }

    #[test]
    fn test_no_pre_is_passthrough() {
        let converter = MarkdownConverter::default();
        let annotated = converter.annotate_code_blocks("<p>plain</p>").unwrap();
        assert_eq!(annotated.html, "<p>plain</p>");
        assert!(annotated.blocks.is_empty());
    }
}
