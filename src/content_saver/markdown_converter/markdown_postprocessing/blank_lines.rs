//! Blank line collapsing.

use regex::Regex;
use std::sync::LazyLock;

/// Three or more consecutive line breaks (CRLF tolerated)
static EXCESS_LINE_BREAKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\r?\n){3,}").expect("EXCESS_LINE_BREAKS: hardcoded regex is valid")
});

/// Collapse every run of 3+ line breaks to exactly two
pub fn collapse_line_breaks(markdown: &str) -> String {
    EXCESS_LINE_BREAKS.replace_all(markdown, "\n\n").into_owned()
}
