//! Small helpers around kuchiki's mutable DOM

use anyhow::{Context, Result, anyhow};
use kuchiki::NodeRef;
use kuchiki::traits::TendrilSink;

/// Parse a full HTML document into a mutable DOM
pub fn parse_document(html: &str) -> NodeRef {
    kuchiki::parse_html().one(html.to_string())
}

/// Parse an HTML snippet and return its top-level nodes, detached-ready
///
/// The snippet is parsed as a document, so the nodes are taken from `<body>`.
pub fn parse_fragment_nodes(html: &str) -> Result<Vec<NodeRef>> {
    let document = parse_document(html);
    let body = document
        .select_first("body")
        .map_err(|()| anyhow!("Replacement markup has no body: {html}"))?;
    Ok(body.as_node().children().collect())
}

/// Replace `node` in its parent with the nodes parsed from `replacement_html`
pub fn replace_node(node: &NodeRef, replacement_html: &str) -> Result<()> {
    for child in parse_fragment_nodes(replacement_html)? {
        node.insert_before(child);
    }
    node.detach();
    Ok(())
}

/// Serialized children of `node`
pub fn inner_html(node: &NodeRef) -> String {
    node.children().map(|child| child.to_string()).collect()
}

/// Serialize a document back to an HTML string
pub fn serialize_document(document: &NodeRef) -> Result<String> {
    let mut output = Vec::new();
    document
        .serialize(&mut output)
        .context("Failed to serialize HTML document")?;
    String::from_utf8(output).context("Serialized HTML is not valid UTF-8")
}
