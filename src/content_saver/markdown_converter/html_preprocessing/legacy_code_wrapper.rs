//! Legacy "code snippet" plugin normalization
//!
//! An old editor plugin wrapped every snippet like this:
//! ```html
//! <div id="codeSnippetWrapper">
//!   <div id="codeSnippet"><pre>   1: int x = 1;
//!    2: </pre></div>
//! </div>
//! ```
//! with a line number in front of every line. This module turns each wrapper
//! into a plain `<pre lang="csharp">` (the plugin was only ever used for C#)
//! so the language classifier sees an explicit marker.

use anyhow::{Result, anyhow};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use super::dom_util::{inner_html, parse_document, replace_node, serialize_document};
use crate::content_saver::markdown_converter::custom_handlers::language_inference::markup_to_text;
use crate::content_saver::markdown_converter::diagnostics::ConversionDiagnostic;
use crate::utils::safe_truncate_chars;

/// Element id the plugin put on its outer wrapper
pub const LEGACY_WRAPPER_SELECTOR: &str = "div#codeSnippetWrapper";

/// Legacy constructs we know about but do not rewrite
const UNSUPPORTED_WRAPPER_SELECTORS: &[&str] = &["div.csharpcode", "div[id^=\"codeSnippet\"]"];

static LINE_NUMBER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\d+:\s?").expect("LINE_NUMBER_PREFIX: hardcoded regex is valid")
});

static UNSUPPORTED_WRAPPER: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(&UNSUPPORTED_WRAPPER_SELECTORS.join(", "))
        .expect("BUG: hardcoded unsupported wrapper selector is invalid")
});

const EXCERPT_CHARS: usize = 120;

/// Strip `<n>:` prefixes and drop lines left empty
///
/// Indentation after the prefix is kept; trailing whitespace is not.
pub fn strip_line_numbers(text: &str) -> String {
    text.split('\n')
        .map(|line| LINE_NUMBER_PREFIX.replace(line, ""))
        .map(|line| line.trim_end().to_string())
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replace every legacy wrapper with a `<pre lang="csharp">` holding its code
///
/// Returns the input unchanged when the document has no wrapper.
pub fn normalize_legacy_code_wrappers(html: &str) -> Result<String> {
    if !html.contains("codeSnippetWrapper") {
        return Ok(html.to_string());
    }

    let document = parse_document(html);
    let wrappers: Vec<_> = document
        .select(LEGACY_WRAPPER_SELECTOR)
        .map_err(|()| anyhow!("Invalid CSS selector: {LEGACY_WRAPPER_SELECTOR}"))?
        .collect();

    if wrappers.is_empty() {
        return Ok(html.to_string());
    }

    tracing::debug!("Normalizing {} legacy code wrappers", wrappers.len());

    for wrapper in wrappers {
        let node = wrapper.as_node();
        let code = strip_line_numbers(&markup_to_text(&inner_html(node)));
        let replacement = format!(
            "<pre lang=\"csharp\">{}</pre>",
            html_escape::encode_text(&code)
        );
        replace_node(node, &replacement)?;
    }

    serialize_document(&document)
}

/// Report legacy constructs left in the document after normalization
///
/// Nested matches are reported once, at the outermost element.
pub fn find_unsupported_wrappers(html: &str) -> Vec<ConversionDiagnostic> {
    if !html.contains("codeSnippet") && !html.contains("csharpcode") {
        return Vec::new();
    }

    let document = Html::parse_document(html);
    document
        .select(&UNSUPPORTED_WRAPPER)
        .filter(|element| {
            !element
                .ancestors()
                .filter_map(ElementRef::wrap)
                .any(|ancestor| UNSUPPORTED_WRAPPER.matches(&ancestor))
        })
        .map(|element| {
            let selector = if element.value().classes().any(|c| c == "csharpcode") {
                UNSUPPORTED_WRAPPER_SELECTORS[0]
            } else {
                UNSUPPORTED_WRAPPER_SELECTORS[1]
            };
            let text: String = element.text().collect();
            ConversionDiagnostic::UnsupportedWrapper {
                selector: selector.to_string(),
                excerpt: safe_truncate_chars(text.trim(), EXCERPT_CHARS).to_string(),
            }
        })
        .collect()
}
