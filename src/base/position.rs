//! Position tracking for exported records
//!
//! Every declaration the export layer reports carries a 0-based source
//! position suitable for editor tooling. The parser reports 1-based lines,
//! so lines are shifted down by one here; columns are already 0-based at
//! the parser boundary and pass through untouched.

/// A span representing a range in source code (0-indexed for LSP compatibility)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// A position in source code (0-indexed)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a span from line/column coordinates
    pub fn from_coords(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start: Position::new(start_line, start_col),
            end: Position::new(end_line, end_col),
        }
    }

    /// Check if a position falls within this span
    pub fn contains(&self, position: Position) -> bool {
        position >= self.start && position <= self.end
    }

    /// True for the zero-width span at the origin, which is what sentinel
    /// records carry.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Convert a parser position (1-based line, 0-based column) into an
    /// exported one. Line 0 from the parser means "unknown" and clamps to 0.
    pub fn from_one_based(line: u32, column: u32) -> Self {
        Self {
            line: line.saturating_sub(1),
            column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_is_decremented() {
        assert_eq!(Position::from_one_based(10, 4), Position::new(9, 4));
    }

    #[test]
    fn test_column_passes_through() {
        assert_eq!(Position::from_one_based(1, 0).column, 0);
        assert_eq!(Position::from_one_based(1, 17).column, 17);
    }

    #[test]
    fn test_unknown_line_clamps() {
        assert_eq!(Position::from_one_based(0, 3), Position::new(0, 3));
    }

    #[test]
    fn test_span_contains_across_lines() {
        let span = Span::from_coords(2, 8, 4, 1);
        assert!(span.contains(Position::new(2, 8)));
        assert!(span.contains(Position::new(3, 0)));
        assert!(span.contains(Position::new(4, 1)));
        assert!(!span.contains(Position::new(2, 7)));
        assert!(!span.contains(Position::new(4, 2)));
    }

    #[test]
    fn test_default_span_is_empty() {
        assert!(Span::default().is_empty());
        assert!(!Span::from_coords(0, 0, 0, 3).is_empty());
    }
}
