//! Markdown cleanup after conversion.
//!
//! Fixes the formatting quirks the old editor baked into post bodies. Rules run
//! in a fixed order:
//!
//! 1. Runs of 3+ line breaks collapse to a single blank line
//! 2. A four-space indentation prefix is stripped
//! 3. Bold markers lose their inner padding, bold spans get one space on
//!    each side and figure captions are rewritten (see [`normalize_emphasis`])
//! 4. Stray spaces before `.`, after `[` and before `]` are removed
//!
//! Rules 2 to 4 work line by line and never touch fenced code, so snippet
//! contents come through byte for byte. Running the pass twice gives the same
//! result as running it once.

mod blank_lines;
mod code_fence_detection;
mod emphasis;
mod indentation;
mod punctuation;

#[cfg(test)]
mod tests;

pub use blank_lines::collapse_line_breaks;
pub use code_fence_detection::{FenceTracker, LineKind};
pub use emphasis::normalize_emphasis;
pub use indentation::strip_indentation_prefix;
pub use punctuation::tighten_punctuation;

/// Apply every cleanup rule to a converted post body
pub fn postprocess(markdown: &str) -> String {
    let collapsed = collapse_line_breaks(markdown);

    let mut fences = FenceTracker::new();
    let lines: Vec<String> = collapsed
        .split('\n')
        .map(|line| match fences.observe(line) {
            LineKind::Fence | LineKind::Code => line.to_string(),
            LineKind::Text => clean_text_line(line),
        })
        .collect();

    lines.join("\n")
}

fn clean_text_line(line: &str) -> String {
    let line = strip_indentation_prefix(line);
    let line = normalize_emphasis(line);
    tighten_punctuation(&line).into_owned()
}
