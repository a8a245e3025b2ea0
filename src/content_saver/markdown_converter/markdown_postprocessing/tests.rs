//! Tests for the post-processing pass as a whole.

use super::postprocess;

#[test]
fn test_collapses_excess_blank_lines() {
    assert_eq!(postprocess("a\n\n\n\n\nb"), "a\n\nb");
    assert_eq!(postprocess("a\n\nb"), "a\n\nb");
}

#[test]
fn test_padded_bold_span() {
    assert_eq!(postprocess("**  Hello  **"), " **Hello** ");
}

#[test]
fn test_figure_caption() {
    assert_eq!(postprocess("**Figure 3:  **"), "***Figure 3***: ");
    assert_eq!(
        postprocess("**Figure 7: **The results"),
        "***Figure 7***: The results"
    );
}

#[test]
fn test_caption_keeps_word_boundary() {
    assert_eq!(
        postprocess("See **Figure 12:**the chart"),
        "See ***Figure 12***: the chart"
    );
}

#[test]
fn test_adjacent_bold_spans() {
    assert_eq!(postprocess("**Note** **this**"), " **Note** **this** ");
    assert_eq!(postprocess("**a**  **b** c"), " **a** **b** c");
}

#[test]
fn test_bold_followed_by_italic() {
    assert_eq!(postprocess("**a** *b*"), " **a** *b*");
    assert_eq!(postprocess("**a** *b* ."), " **a** *b*.");
}

#[test]
fn test_indented_paragraph() {
    assert_eq!(postprocess("    Indented paragraph"), "Indented paragraph");
}

#[test]
fn test_punctuation() {
    assert_eq!(
        postprocess("Read [ the docs ](https://example.com) ."),
        "Read [the docs](https://example.com)."
    );
}

#[test]
fn test_fenced_code_untouched() {
    let markdown = "Intro **  x  **\n\n\
                    {{< highlight csharp \"linenos=table,linenostart=1\" >}}\n\
                    \x20   var a = b ;  // ** keep **\n\
                    \x20   list[ 0 ] = 1 .5;\n\
                    {{< / highlight >}}\n\n\
                    Outro .";
    let result = postprocess(markdown);

    assert!(
        result.contains("    var a = b ;  // ** keep **\n    list[ 0 ] = 1 .5;\n"),
        "Got: {result}"
    );
    assert!(result.starts_with("Intro **x** "), "Got: {result}");
    assert!(result.ends_with("Outro."), "Got: {result}");
}

#[test]
fn test_backtick_fence_untouched() {
    let markdown = "```\n    ** a **\n```\n    after";
    assert_eq!(postprocess(markdown), "```\n    ** a **\n```\nafter");
}

#[test]
fn test_postprocess_is_idempotent_on_samples() {
    let samples = [
        "**  Hello  **",
        "**Figure 3:  **",
        "**a** b",
        "**a** .",
        "[ **a** ]",
        "x **a*b** c **d**",
        "**  **a**",
        "    ** x",
        "Text\n\n\n\n    **Figure 1: ** caption .\n\n\n",
        "* **item** one\n* item two",
        "** * ",
        "**Note** **this**",
        "**a** *b*",
        "See **Figure 12:**the chart",
        "** **Figure 1:**",
        "[ **a** ] **b** .",
        "    **a**\t**b**",
        "*** ** x",
    ];

    for sample in samples {
        let once = postprocess(sample);
        assert_eq!(postprocess(&once), once, "not idempotent for {sample:?}");
    }
}
