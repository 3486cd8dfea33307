// Chunk: docs/chunks/text_positions - Offsets, regions and line lookup

//! Line index for mapping character offsets to lines.
//!
//! Maintains an array of line start offsets for O(1) line count and
//! O(log n) lookup of which line contains a given offset.

use crate::types::Position;

/// Tracks line boundaries in a document's text.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Character offsets where each line starts. line_starts[0] = 0 always.
    line_starts: Vec<usize>,
    /// Total number of characters indexed.
    len: usize,
}

impl LineIndex {
    /// Creates a new line index with a single empty line.
    pub fn new() -> Self {
        Self {
            line_starts: vec![0],
            len: 0,
        }
    }

    /// Builds an index for `text`.
    pub fn from_text(text: &str) -> Self {
        let mut index = Self::new();
        index.rebuild(text.chars());
        index
    }

    /// Rebuilds the line index from the given content.
    pub fn rebuild<I>(&mut self, content: I)
    where
        I: IntoIterator<Item = char>,
    {
        self.line_starts.clear();
        self.line_starts.push(0);

        let mut offset = 0;
        for ch in content {
            offset += 1;
            if ch == '\n' {
                self.line_starts.push(offset);
            }
        }
        self.len = offset;
    }

    /// Returns the number of lines.
    ///
    /// A document always has at least one line (even if empty). A trailing
    /// newline opens one more, empty, line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the number of characters indexed.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the character offset where the given line starts.
    ///
    /// Returns None if the line index is out of bounds.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Returns the line number containing the given character offset.
    ///
    /// Offsets past the end clamp to the last line.
    pub fn line_at_offset(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        }
    }

    /// Converts a character offset into a (line, column) position.
    pub fn position_of(&self, offset: usize) -> Position {
        let line = self.line_at_offset(offset);
        let col = offset.min(self.len) - self.line_starts[line];
        Position::new(line, col)
    }

    /// Returns the line starts (for debugging/testing).
    #[cfg(test)]
    pub fn line_starts(&self) -> &[usize] {
        &self.line_starts
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}
