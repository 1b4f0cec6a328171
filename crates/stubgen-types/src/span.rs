use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte range inside a single DSL type expression.
///
/// `start` is inclusive, `end` is exclusive. Type expressions are one-line
/// strings, so no line information is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a zero-width span at a single position.
    pub fn point(offset: u32) -> Self {
        Self::new(offset, offset)
    }

    /// Merge two spans into one that covers both.
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Length of the span in bytes.
    pub fn len(self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` for zero-width spans.
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// The slice of `source` covered by this span, clamped to its bounds.
    pub fn slice(self, source: &str) -> &str {
        let start = (self.start as usize).min(source.len());
        let end = (self.end as usize).clamp(start, source.len());
        source.get(start..end).unwrap_or("")
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
