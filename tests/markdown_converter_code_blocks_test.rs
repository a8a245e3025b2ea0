use blog_transfer::content_saver::markdown_converter::{
    ConversionDiagnostic, ConversionOptions, LanguageTag, convert_post_body,
    normalize_legacy_code_wrappers,
};

const LINENOS: &str = "\"linenos=table,linenostart=1\"";

/// A `brush:` class is the strongest signal and is fenced with its own label
#[test]
fn test_brush_marked_block_gets_csharp_fence() {
    let html = r#"<pre class="brush: csharp;">public static void Foo(){}</pre>"#;
    let body = convert_post_body(html, &ConversionOptions::default()).unwrap();

    assert_eq!(body.languages, vec![LanguageTag::Csharp]);
    assert_eq!(
        body.markdown,
        format!("{{{{< highlight csharp {LINENOS} >}}}}\npublic static void Foo(){{}}\n{{{{< / highlight >}}}}")
    );
}

#[test]
fn test_line_numbered_wrapper_normalized() {
    let html = "<div id=\"codeSnippetWrapper\">1: int x = 1;\n2: </div>";
    let normalized = normalize_legacy_code_wrappers(html).unwrap();
    assert!(
        normalized.contains("<pre lang=\"csharp\">int x = 1;</pre>"),
        "Got: {normalized}"
    );
}

#[test]
fn test_padded_bold_text() {
    assert_eq!(blog_transfer::postprocess("**  Hello  **"), " **Hello** ");
}

#[test]
fn test_figure_caption() {
    assert_eq!(blog_transfer::postprocess("**Figure 3:  **"), "***Figure 3***: ");
}

#[test]
fn test_line_numbers_can_be_disabled() {
    let options = ConversionOptions {
        line_numbers: false,
        ..ConversionOptions::default()
    };
    let body = convert_post_body(r#"<pre lang="yaml">a: 1</pre>"#, &options).unwrap();
    assert_eq!(
        body.markdown,
        "{{< highlight yaml >}}\na: 1\n{{< / highlight >}}"
    );
}

#[test]
fn test_full_legacy_post() {
    let html = include_str!("fixtures/legacy_post.html");
    let body = convert_post_body(html, &ConversionOptions::default()).unwrap();
    let md = &body.markdown;

    assert_eq!(
        body.languages,
        vec![
            LanguageTag::Sql,
            LanguageTag::Csharp,
            LanguageTag::Xml,
            LanguageTag::Csharp
        ]
    );

    assert!(md.contains("**NHibernate**"), "Got: {md}");
    assert!(md.contains("shows the idea."), "Got: {md}");
    assert!(!md.contains('\u{c2}'), "Got: {md}");
    assert!(md.contains("***Figure 1***: The result set"), "Got: {md}");

    assert!(
        md.contains(&format!(
            "{{{{< highlight sql {LINENOS} >}}}}\nSELECT Id, Name\nFROM Customers\n\nWHERE Country = 'IT'\n{{{{< / highlight >}}}}"
        )),
        "Got: {md}"
    );
    assert!(
        md.contains(&format!(
            "{{{{< highlight csharp {LINENOS} >}}}}\nvar session = factory.OpenSession();\nvar list = session.CreateQuery(hql).List<Customer>();\n{{{{< / highlight >}}}}"
        )),
        "Got: {md}"
    );
    assert!(
        md.contains(&format!(
            "{{{{< highlight xml {LINENOS} >}}}}\n<hibernate-configuration>\n  <session-factory />\n</hibernate-configuration>\n{{{{< / highlight >}}}}"
        )),
        "Got: {md}"
    );
    assert!(
        md.contains(&format!(
            "{{{{< highlight csharp {LINENOS} >}}}}\nmake it so\n{{{{< / highlight >}}}}"
        )),
        "Got: {md}"
    );
    assert!(md.contains("int legacy = 1;"), "Got: {md}");
    assert!(!md.contains("codeSnippet"), "Got: {md}");
    assert!(!md.contains("\n\n\n"), "Got: {md:?}");

    assert_eq!(body.diagnostics.len(), 2);
    assert!(matches!(
        &body.diagnostics[0],
        ConversionDiagnostic::UnsupportedWrapper { selector, .. } if selector == "div.csharpcode"
    ));
    assert!(matches!(
        &body.diagnostics[1],
        ConversionDiagnostic::ClassificationAmbiguous { excerpt, fallback: LanguageTag::Csharp }
            if excerpt == "make it so"
    ));
}

#[test]
fn test_every_fence_is_labelled() {
    let html = "<pre>a</pre><pre>b.c d.e f.g h.i</pre><pre class=\"brush: plain;\">x</pre>";
    let body = convert_post_body(html, &ConversionOptions::default()).unwrap();

    assert_eq!(body.languages.len(), 3);
    assert!(!body.languages.contains(&LanguageTag::Unknown));
    assert_eq!(body.markdown.matches("{{< highlight ").count(), 3);
    assert!(!body.markdown.contains("{{< highlight  "));
}
