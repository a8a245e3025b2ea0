//! Post body conversion: legacy CMS HTML to Hugo markdown.
//!
//! This module owns the whole per-post pipeline:
//! 1. Repair `Â` mojibake left by the old CMS
//! 2. Rewrite legacy line-numbered snippet wrappers into plain `<pre>` blocks
//! 3. Classify every code block and replace it with a Hugo `highlight` fence
//! 4. Convert the document with htmd
//! 5. Clean up the markdown (blank lines, bold markers, captions, spacing)
//!
//! # Usage
//!
//! ## Synchronous
//! ```rust
//! # use blog_transfer::content_saver::markdown_converter::{convert_post_body, ConversionOptions};
//! let html = r#"<p>Intro</p><pre class="brush: sql;">SELECT 1</pre>"#;
//! let body = convert_post_body(html, &ConversionOptions::default())?;
//! assert!(body.markdown.contains("{{< highlight sql"));
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Asynchronous
//! ```rust
//! # use std::sync::Arc;
//! # use blog_transfer::content_saver::markdown_converter::{convert_post_body_async, ConversionOptions};
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let options = Arc::new(ConversionOptions::default());
//! let body = convert_post_body_async("<h2>Hi</h2>".to_string(), options).await?;
//! assert_eq!(body.markdown, "## Hi");
//! # Ok::<(), anyhow::Error>(())
//! # }).unwrap();
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::Arc;

pub mod custom_handlers;
pub mod diagnostics;
pub mod html_preprocessing;
pub mod html_to_markdown;
pub mod markdown_postprocessing;

pub use custom_handlers::language_inference::{
    ClassificationStrategy, CodeBlock, LanguageClassifier, LanguageMatch,
};
pub use custom_handlers::language_patterns::{ConstructSignatures, LanguageTag, SignatureSet};
pub use diagnostics::ConversionDiagnostic;
pub use html_preprocessing::{
    find_unsupported_wrappers, normalize_legacy_code_wrappers, repair_mojibake,
};
pub use html_to_markdown::{AnnotatedHtml, MarkdownConverter, fence_code_block};
pub use markdown_postprocessing::postprocess;

/// Configuration for converting one post body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Language written into the fence when no heuristic recognises a block (default: csharp)
    ///
    /// The old blog was mostly C#, so this is an editorial default rather than
    /// a detection result. Every use is reported as a diagnostic.
    pub fallback_language: LanguageTag,

    /// Emit `linenos=table,linenostart=1` on every fence (default: true)
    pub line_numbers: bool,

    /// Replace stray `Â` characters with spaces (default: true)
    pub repair_mojibake: bool,

    /// Rewrite `div#codeSnippetWrapper` blocks into `<pre lang="csharp">` (default: true)
    pub normalize_legacy_wrappers: bool,

    /// Run the markdown cleanup rules after conversion (default: true)
    pub postprocess: bool,

    /// Construct signature tables used by the classifier
    pub signatures: ConstructSignatures,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            fallback_language: LanguageTag::Csharp,
            line_numbers: true,
            repair_mojibake: true,
            normalize_legacy_wrappers: true,
            postprocess: true,
            signatures: ConstructSignatures::default(),
        }
    }
}

impl ConversionOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classification and fencing only; no repair, normalization or cleanup
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            repair_mojibake: false,
            normalize_legacy_wrappers: false,
            postprocess: false,
            ..Self::default()
        }
    }
}

/// Markdown body of one post plus what was learned converting it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedBody {
    pub markdown: String,
    /// Language of each fenced block, in document order
    pub languages: Vec<LanguageTag>,
    pub diagnostics: Vec<ConversionDiagnostic>,
}

/// Convert a post body synchronously
///
/// Builds a fresh classifier from `options`. Use
/// [`convert_post_body_with`] to reuse one across posts.
pub fn convert_post_body(html: &str, options: &ConversionOptions) -> Result<ConvertedBody> {
    let converter = MarkdownConverter::new(options);
    convert_post_body_with(&converter, html)
}

/// Convert a post body with an existing converter and its options
pub fn convert_post_body_with(converter: &MarkdownConverter, html: &str) -> Result<ConvertedBody> {
    let options = converter.options();

    let repaired = if options.repair_mojibake {
        repair_mojibake(html)
    } else {
        Cow::Borrowed(html)
    };

    let normalized = if options.normalize_legacy_wrappers {
        normalize_legacy_code_wrappers(&repaired)
            .context("Failed to normalize legacy code wrappers")?
    } else {
        repaired.into_owned()
    };

    let mut diagnostics = find_unsupported_wrappers(&normalized);
    for diagnostic in &diagnostics {
        tracing::warn!("{}", diagnostic);
    }

    let annotated = converter
        .annotate_code_blocks(&normalized)
        .context("Failed to annotate code blocks")?;
    tracing::debug!("Fenced {} code blocks", annotated.blocks.len());

    let markdown = converter
        .convert_sync(&annotated.html)
        .context("Failed to convert HTML to markdown")?;

    let markdown = if options.postprocess {
        postprocess(&markdown)
    } else {
        markdown
    };

    let languages = annotated.languages();
    diagnostics.extend(annotated.diagnostics);

    Ok(ConvertedBody {
        markdown,
        languages,
        diagnostics,
    })
}

/// Convert a post body on the blocking thread pool
///
/// kuchiki and htmd are CPU-bound and hold `Rc` trees, so the whole pipeline
/// runs inside `spawn_blocking`.
pub async fn convert_post_body_async(
    html: String,
    options: Arc<ConversionOptions>,
) -> Result<ConvertedBody> {
    tokio::task::spawn_blocking(move || convert_post_body(&html, &options))
        .await
        .map_err(|e| anyhow::anyhow!("Post conversion task panicked: {}", e))?
}
