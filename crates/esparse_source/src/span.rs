//! Line/column ranges within source text for tracking source locations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A line/column range within a source file.
///
/// All coordinates are 1-indexed; line 0 marks the [`DUMMY`](Self::DUMMY)
/// span used for synthetic constructs with no source location. Spans are
/// produced by the scanner and passed through the diagnostic pipeline
/// unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SourceSpan {
    /// Line of the first character (1-indexed).
    pub start_line: u32,
    /// Column of the first character (1-indexed).
    pub start_column: u32,
    /// Line of the last character (1-indexed).
    pub end_line: u32,
    /// Column just past the last character.
    pub end_column: u32,
}

impl SourceSpan {
    /// A dummy span used when no source location is available.
    pub const DUMMY: SourceSpan = SourceSpan {
        start_line: 0,
        start_column: 0,
        end_line: 0,
        end_column: 0,
    };

    /// Creates a new span from start and end coordinates.
    pub fn new(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// Merges two spans, producing a span that covers both.
    ///
    /// Takes the earlier start position and the later end position, comparing
    /// positions as (line, column) pairs.
    pub fn merge(self, other: SourceSpan) -> SourceSpan {
        let (start_line, start_column) = (self.start_line, self.start_column)
            .min((other.start_line, other.start_column));
        let (end_line, end_column) =
            (self.end_line, self.end_column).max((other.end_line, other.end_column));
        SourceSpan {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// Returns `true` if this is the dummy span.
    pub fn is_dummy(&self) -> bool {
        self.start_line == 0
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start_line, self.start_column)
    }
}
