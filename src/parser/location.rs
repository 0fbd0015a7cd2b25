//! Source locations as the parser reports them.
//!
//! Lines are 1-based and columns 0-based character offsets, the convention
//! flatc uses in its diagnostics. The export layer converts these to fully
//! 0-based positions.

use crate::base::LineIndex;
use text_size::TextSize;

/// A parser-side source location: 1-based line, 0-based column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceLoc {
    pub line: u32,
    pub col: u32,
}

/// A parser-side source range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SourceSpan {
    pub start: SourceLoc,
    pub end: SourceLoc,
}

impl SourceLoc {
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }

    /// Location of a byte offset within the text indexed by `index`.
    pub fn at(index: &LineIndex, offset: TextSize) -> Self {
        let lc = index.line_col(offset);
        Self {
            line: lc.line + 1,
            col: lc.col,
        }
    }
}

impl SourceSpan {
    pub fn new(start: SourceLoc, end: SourceLoc) -> Self {
        Self { start, end }
    }
}
