// Chunk: docs/chunks/text_positions - Offsets, regions and line lookup

use std::fmt;

use serde::{Deserialize, Serialize};

/// Position in a document as (line, column) where both are 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

/// A half-open range of character offsets `[start, end)`.
///
/// `start` is where the symbol (or caret) begins; everything the outline
/// needs to know about a symbol's location is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextRegion {
    pub start: usize,
    pub end: usize,
}

impl TextRegion {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_display_is_one_based() {
        assert_eq!(Position::new(0, 0).to_string(), "1:1");
        assert_eq!(Position::new(4, 2).to_string(), "5:3");
    }

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(1, 0) > Position::new(0, 9));
        assert!(Position::new(1, 2) < Position::new(1, 3));
    }

    #[test]
    fn test_empty_region_contains_nothing() {
        assert!(!TextRegion::new(7, 7).contains(7));
    }

    #[test]
    fn test_region_contains_is_half_open() {
        let region = TextRegion::new(3, 6);
        assert!(region.contains(3));
        assert!(region.contains(5));
        assert!(!region.contains(6));
    }

    #[test]
    fn test_inverted_region_contains_nothing() {
        let region = TextRegion::new(5, 2);
        assert!(!region.contains(2));
        assert!(!region.contains(4));
    }
}
