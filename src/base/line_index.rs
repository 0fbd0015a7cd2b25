//! Byte offset to line/column conversion.

use text_size::TextSize;

/// A 0-based line and character column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Maps byte offsets of one source text to line/column pairs.
///
/// Columns count characters, not bytes, so a multi-byte identifier earlier on
/// a line does not skew positions reported after it.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset of the first character of every line.
    line_starts: Vec<TextSize>,
    text: Box<str>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::new(offset as u32 + 1));
            }
        }
        Self {
            line_starts,
            text: text.into(),
        }
    }

    /// Convert a byte offset into a 0-based line and character column.
    ///
    /// Offsets past the end clamp to the end of the text.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(TextSize::of(&*self.text));
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let start = usize::from(self.line_starts[line]);
        let end = usize::from(offset);
        let col = self
            .text
            .get(start..end)
            .map_or(end - start, |slice| slice.chars().count());
        LineCol {
            line: line as u32,
            col: col as u32,
        }
    }

    /// Number of lines in the text (a trailing newline starts a new, empty line).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
