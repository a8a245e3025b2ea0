//! Indentation stripping.
//!
//! Paragraphs nested in the old CMS's layout divs come out of the converter
//! indented by four spaces, which markdown would render as a code block.

const INDENT: &str = "    ";

/// Strip one four-space prefix from a line
///
/// Only applies when the prefix is followed by non-whitespace; deeper or
/// blank indentation is left as is.
pub fn strip_indentation_prefix(line: &str) -> &str {
    match line.strip_prefix(INDENT) {
        Some(rest) if rest.chars().next().is_some_and(|c| !c.is_whitespace()) => rest,
        _ => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_indentation_prefix() {
        assert_eq!(strip_indentation_prefix("    text"), "text");
        assert_eq!(strip_indentation_prefix("  text"), "  text");
        assert_eq!(strip_indentation_prefix("        deep"), "        deep");
        assert_eq!(strip_indentation_prefix("    "), "    ");
        assert_eq!(strip_indentation_prefix("text    "), "text    ");
    }
}
