//! Code fence detection for line-local rules.
//!
//! Two fence styles show up in converted posts: the Hugo `highlight`
//! shortcode written for every classified snippet, and plain backtick fences
//! for the rare block that was not classified.

const HIGHLIGHT_OPEN: &str = "{{< highlight";
const HIGHLIGHT_CLOSE: &str = "{{< / highlight >}}";

/// Where a line sits relative to fenced code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// An opening or closing fence line
    Fence,
    /// Inside a fenced region
    Code,
    /// Ordinary markdown
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FenceState {
    Outside,
    Highlight,
    Backticks,
}

/// Tracks fence state while walking a document line by line
#[derive(Debug)]
pub struct FenceTracker {
    state: FenceState,
}

impl FenceTracker {
    pub fn new() -> Self {
        Self {
            state: FenceState::Outside,
        }
    }

    /// Classify `line` and advance the state
    pub fn observe(&mut self, line: &str) -> LineKind {
        let trimmed = line.trim();

        match self.state {
            FenceState::Outside => {
                if trimmed.starts_with(HIGHLIGHT_OPEN) {
                    self.state = FenceState::Highlight;
                    LineKind::Fence
                } else if trimmed.starts_with("```") {
                    self.state = FenceState::Backticks;
                    LineKind::Fence
                } else {
                    LineKind::Text
                }
            }
            FenceState::Highlight => {
                if trimmed == HIGHLIGHT_CLOSE {
                    self.state = FenceState::Outside;
                    LineKind::Fence
                } else {
                    LineKind::Code
                }
            }
            FenceState::Backticks => {
                if trimmed.starts_with("```") {
                    self.state = FenceState::Outside;
                    LineKind::Fence
                } else {
                    LineKind::Code
                }
            }
        }
    }
}

impl Default for FenceTracker {
    fn default() -> Self {
        Self::new()
    }
}
