//! Property tests for markdown cleanup and front-matter sanitizing

use blog_transfer::{postprocess, sanitize};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

/// A bold span with optional padding inside the markers
fn bold_span() -> impl Strategy<Value = String> {
    (" {0,2}", word(), " {0,2}").prop_map(|(left, inner, right)| format!("**{left}{inner}{right}**"))
}

/// One prose token: a word, a bold span, an italic word or a stray asterisk run
fn prose_token() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => word(),
        3 => bold_span(),
        1 => word().prop_map(|w| format!("*{w}*")),
        1 => prop_oneof![Just("*"), Just("**"), Just("***")].prop_map(String::from),
        1 => Just(".".to_string()),
        1 => word().prop_map(|w| format!("[ {w} ]")),
    ]
}

/// One prose line: tokens separated by zero to two spaces, maybe the
/// editor's four-space indentation
fn prose_line() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec((prose_token(), " {0,2}"), 1..8),
    )
        .prop_map(|(indent, tokens)| {
            let mut line = String::new();
            if indent {
                line.push_str("    ");
            }
            for (token, gap) in tokens {
                line.push_str(&token);
                line.push_str(&gap);
            }
            line
        })
}

/// Prose lines separated by one to four line breaks
fn prose_document() -> impl Strategy<Value = String> {
    prop::collection::vec((prose_line(), 1usize..=4), 1..8).prop_map(|parts| {
        let mut doc = String::new();
        for (line, breaks) in parts {
            if !doc.is_empty() {
                doc.push_str(&"\n".repeat(breaks));
            }
            doc.push_str(&line);
        }
        doc
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2048))]

    #[test]
    fn postprocess_is_idempotent(doc in prose_document()) {
        let once = postprocess(&doc);
        let twice = postprocess(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn postprocess_is_idempotent_on_any_text(doc in "[ab* .\\[\\]\n\t:F1]{0,16}") {
        let once = postprocess(&doc);
        prop_assert_eq!(postprocess(&once), once);
    }

    #[test]
    fn postprocess_is_idempotent_with_captions(
        parts in prop::collection::vec(
            prop_oneof![
                Just("**Figure 1:**"),
                Just("**Figure 2: **"),
                Just("** "),
                Just("*"),
                Just(" "),
                Just("\t"),
                Just("x"),
                Just("."),
                Just("["),
                Just("]"),
                Just("\n"),
            ],
            0..12,
        )
    ) {
        let doc = parts.concat();
        let once = postprocess(&doc);
        prop_assert_eq!(postprocess(&once), once);
    }

    #[test]
    fn bold_spans_are_padded(inner in "[a-z]{1,6}", left in " {0,2}", right in " {0,2}") {
        let doc = format!("x **{left}{inner}{right}** **{inner}** *{inner}*");
        prop_assert_eq!(
            postprocess(&doc),
            format!("x **{inner}** **{inner}** *{inner}*")
        );
    }

    #[test]
    fn postprocess_leaves_no_triple_breaks(doc in prose_document()) {
        let cleaned = postprocess(&doc);
        prop_assert!(!cleaned.contains("\n\n\n"));
    }

    #[test]
    fn postprocess_keeps_words(doc in prose_document()) {
        let cleaned = postprocess(&doc);
        let before: Vec<&str> = doc.split(|c: char| !c.is_ascii_alphabetic()).filter(|w| !w.is_empty()).collect();
        let after: Vec<&str> = cleaned.split(|c: char| !c.is_ascii_alphabetic()).filter(|w| !w.is_empty()).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn postprocess_never_touches_fenced_code(
        code_lines in prop::collection::vec("[a-z \\*\\.\\[\\]]{1,20}", 1..6)
    ) {
        let body = code_lines.join("\n");
        let fence = format!("{{{{< highlight csharp >}}}}\n{body}\n{{{{< / highlight >}}}}");
        let doc = format!("intro .\n\n{fence}\n\n**  outro  **");

        let cleaned = postprocess(&doc);
        prop_assert!(cleaned.contains(&fence), "lost fence in {:?}", cleaned);
        prop_assert!(cleaned.starts_with("intro.\n\n"));
    }

    #[test]
    fn sanitize_keeps_only_safe_characters(text in any::<String>()) {
        let clean = sanitize(&text);
        prop_assert!(clean.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-'));
        prop_assert_eq!(sanitize(&clean), clean.clone());
        prop_assert!(clean.len() <= text.len());
    }
}
