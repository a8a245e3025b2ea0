//! Stray spaces around punctuation and brackets.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static SPACE_BEFORE_PERIOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r" +\.").expect("SPACE_BEFORE_PERIOD: hardcoded regex is valid")
});

static SPACE_AFTER_OPEN_BRACKET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[ +").expect("SPACE_AFTER_OPEN_BRACKET: hardcoded regex is valid")
});

static SPACE_BEFORE_CLOSE_BRACKET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r" +\]").expect("SPACE_BEFORE_CLOSE_BRACKET: hardcoded regex is valid")
});

/// Remove spaces before `.`, after `[` and before `]`
pub fn tighten_punctuation(line: &str) -> Cow<'_, str> {
    if !line.contains(' ') {
        return Cow::Borrowed(line);
    }

    let line = SPACE_BEFORE_PERIOD.replace_all(line, ".");
    let line = SPACE_AFTER_OPEN_BRACKET.replace_all(&line, "[").into_owned();
    let line = SPACE_BEFORE_CLOSE_BRACKET.replace_all(&line, "]").into_owned();
    Cow::Owned(line)
}
