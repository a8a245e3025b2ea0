//! Custom handlers for htmd HTML-to-Markdown conversion
//!
//! htmd does the generic work (headings, links, lists, tables, emphasis).
//! The only override is `<pre>`: blocks already annotated with a highlight
//! fence are emitted verbatim, so the fence survives conversion untouched.

pub mod language_inference;
pub mod language_patterns;

use htmd::{
    Element, HtmlToMarkdown,
    element_handler::{HandlerResult, Handlers},
    options::{HeadingStyle, Options},
};

/// Attribute marking a `<pre>` whose text is already a complete fenced block
pub const FENCED_ATTR: &str = "data-fenced";

/// Create an htmd converter with the fenced-block handler
pub fn create_converter() -> HtmlToMarkdown {
    HtmlToMarkdown::builder()
        .options(Options {
            heading_style: HeadingStyle::Atx,
            ..Default::default()
        })
        .skip_tags(vec!["script", "style"])
        .add_handler(vec!["pre"], pre_handler)
        .build()
}

/// Handle `<pre>` elements
fn pre_handler(_handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let raw = extract_raw_text(element.node);
    let content = raw.trim_matches(|c| c == '\n' || c == '\r');

    if get_attr(element.attrs, FENCED_ATTR).is_some() {
        return Some(HandlerResult::from(format!("\n\n{content}\n\n")));
    }

    // Unannotated blocks are the ones the classifier skipped as blank
    if content.trim().is_empty() {
        return Some(HandlerResult::from(String::new()));
    }

    Some(HandlerResult::from(format!("\n\n```\n{content}\n```\n\n")))
}

/// Extract raw text content from a node tree, preserving all whitespace
fn extract_raw_text(node: &std::rc::Rc<markup5ever_rcdom::Node>) -> String {
    use markup5ever_rcdom::NodeData;

    let mut text = String::new();

    match &node.data {
        NodeData::Text { contents } => {
            text.push_str(&contents.borrow());
        }
        NodeData::Element { .. } | NodeData::Document | NodeData::Doctype { .. } => {
            for child in node.children.borrow().iter() {
                text.push_str(&extract_raw_text(child));
            }
        }
        NodeData::Comment { .. } | NodeData::ProcessingInstruction { .. } => {}
    }

    text
}

/// Get attribute value from element
fn get_attr(attrs: &[html5ever::Attribute], name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|a| &*a.name.local == name)
        .map(|a| a.value.to_string())
}
