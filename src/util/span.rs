//! Source location tracking
//!
//! Spans only ride along on `Loc` wrappers; reduction strips them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Source position (line and column, both 1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    #[inline]
    pub fn new(
        line: u32,
        column: u32,
    ) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Source span (start inclusive, end exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Create a new span
    #[inline]
    pub fn new(
        start: Position,
        end: Position,
    ) -> Self {
        Self { start, end }
    }

    /// Span covering a single line segment
    #[inline]
    pub fn on_line(
        line: u32,
        from: u32,
        to: u32,
    ) -> Self {
        Self::new(Position::new(line, from), Position::new(line, to))
    }

    /// Synthesized nodes carry the zero span
    #[inline]
    pub fn is_dummy(&self) -> bool {
        self.start.line == 0
    }
}

impl fmt::Display for Span {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if self.is_dummy() {
            write!(f, "<unknown>")
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}
