//! HTML preprocessing before code-block classification.
//!
//! - Mojibake repair (`Â` left behind by a bad Latin-1 round trip)
//! - Legacy line-numbered code wrappers rewritten to plain `<pre>` blocks
//! - Detection of legacy constructs we leave alone

pub mod dom_util;
pub mod legacy_code_wrapper;

use std::borrow::Cow;

pub use legacy_code_wrapper::{
    find_unsupported_wrappers, normalize_legacy_code_wrappers, strip_line_numbers,
};

/// Replace the stray `Â` the old CMS left in front of non-breaking spaces
pub fn repair_mojibake(html: &str) -> Cow<'_, str> {
    if html.contains('Â') {
        Cow::Owned(html.replace('Â', " "))
    } else {
        Cow::Borrowed(html)
    }
}
