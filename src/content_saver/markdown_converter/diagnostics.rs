//! Non-fatal findings produced while converting a post body

use serde::Serialize;
use std::fmt;

use super::custom_handlers::language_patterns::LanguageTag;

/// Something a human should look at, but which did not stop the conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConversionDiagnostic {
    /// No heuristic recognised the snippet; it was fenced with `fallback`
    ClassificationAmbiguous { excerpt: String, fallback: LanguageTag },

    /// Legacy markup left for the generic converter to flatten
    UnsupportedWrapper { selector: String, excerpt: String },
}

impl fmt::Display for ConversionDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClassificationAmbiguous { excerpt, fallback } => {
                write!(f, "unclassified code block (fenced as {fallback}): {excerpt}")
            }
            Self::UnsupportedWrapper { selector, excerpt } => {
                write!(f, "unsupported legacy wrapper {selector}: {excerpt}")
            }
        }
    }
}
