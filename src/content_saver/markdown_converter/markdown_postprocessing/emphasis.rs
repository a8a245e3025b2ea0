//! Bold marker cleanup.
//!
//! The old editor produced bold runs with stray padding inside the markers
//! (`**  Hello  **`), which CommonMark does not treat as emphasis.
//!
//! A line is split into asterisk runs and the text between them. Only runs of
//! exactly two asterisks are markers; single asterisks (italics, bullets) and
//! longer runs are copied through. Markers pair left to right when the text
//! between two neighbouring markers is not blank:
//!
//! - a pair becomes ` **text** `, padding inside the markers dropped
//! - a pair holding `Figure N:` becomes the caption label `***Figure N***: `
//! - an unpaired marker loses the padding after it (`"** x"` becomes `"**x"`)

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static FIGURE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Figure (?P<id>\d*):$").expect("FIGURE_LABEL: hardcoded regex is valid")
});

const MARKER: &str = "**";

fn is_padding(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_blank(text: &str) -> bool {
    text.trim_matches(is_padding).is_empty()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<'a> {
    Stars(&'a str),
    Text(&'a str),
}

impl Piece<'_> {
    fn is_marker(self) -> bool {
        matches!(self, Piece::Stars(run) if run == MARKER)
    }
}

/// Padding handling for the text piece that follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Padding {
    Keep,
    AfterSpan,
    AfterMarker,
}

/// Alternating asterisk runs and text, in line order
fn split_pieces(line: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut rest = line;

    while !rest.is_empty() {
        let stars = rest.starts_with('*');
        let end = rest
            .find(|c: char| (c == '*') != stars)
            .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(end);
        pieces.push(if stars {
            Piece::Stars(head)
        } else {
            Piece::Text(head)
        });
        rest = tail;
    }

    pieces
}

/// Inner text of every opening marker, indexed like `pieces`
///
/// The closing marker of an opener at `i` sits at `i + 2`.
fn pair_markers<'a>(pieces: &[Piece<'a>]) -> Vec<Option<&'a str>> {
    let mut openers = vec![None; pieces.len()];
    let mut open: Option<usize> = None;

    for (i, piece) in pieces.iter().enumerate() {
        if !piece.is_marker() {
            continue;
        }
        match open {
            Some(o) if i == o + 2 => match pieces[o + 1] {
                Piece::Text(inner) if !is_blank(inner) => {
                    openers[o] = Some(inner);
                    open = None;
                }
                _ => open = Some(i),
            },
            _ => open = Some(i),
        }
    }

    openers
}

fn push_label(out: &mut String, inner: &str) {
    let kept = out.trim_end_matches(is_padding).len();
    out.truncate(kept);

    match FIGURE_LABEL.captures(inner) {
        Some(caps) => {
            if !out.is_empty() {
                out.push(' ');
            }
            let id = caps.name("id").map_or("", |m| m.as_str());
            out.push_str("***Figure ");
            out.push_str(id);
            out.push_str("***: ");
        }
        None => {
            out.push_str(" **");
            out.push_str(inner);
            out.push_str("** ");
        }
    }
}

/// Tighten bold markers, pad bold spans and rewrite figure caption labels
pub fn normalize_emphasis(line: &str) -> Cow<'_, str> {
    if !line.contains(MARKER) {
        return Cow::Borrowed(line);
    }

    let pieces = split_pieces(line);
    let openers = pair_markers(&pieces);

    let mut out = String::with_capacity(line.len() + 8);
    let mut padding = Padding::Keep;
    let mut i = 0;

    while i < pieces.len() {
        if let Some(inner) = openers[i] {
            push_label(&mut out, inner.trim_matches(is_padding));
            padding = Padding::AfterSpan;
            i += 3;
            continue;
        }

        match pieces[i] {
            Piece::Stars(run) => {
                out.push_str(run);
                padding = if run == MARKER {
                    Padding::AfterMarker
                } else {
                    Padding::Keep
                };
            }
            Piece::Text(text) => {
                // Padding between a stray marker and the next asterisk run
                // stays, or the two runs would merge
                let before_stars = i + 1 < pieces.len() && is_blank(text);
                let text = match padding {
                    Padding::AfterSpan => text.trim_start_matches(is_padding),
                    Padding::AfterMarker if !before_stars => text.trim_start_matches(is_padding),
                    _ => text,
                };
                out.push_str(text);
                padding = Padding::Keep;
            }
        }
        i += 1;
    }

    Cow::Owned(out)
}
