// Chunk: docs/chunks/symbol_tracking - Symbol model, active symbol tracking, indentation strategies

//! Active symbol tracking.
//!
//! Each symbol owns the lines from its own start line up to (not including)
//! the next symbol's start line; the last symbol owns everything to the end
//! of the document:
//!
//! ```text
//! line  0  fn a() {      ┐ span(0) = 0..5
//! line  4  }             ┘
//! line  5  fn b() {      ┐ span(1) = 5..10   <- caret on line 7: b is active
//! line 10  fn c() {      ┐ span(2) = 10..15  (15 = total line count)
//! ```
//!
//! Spans therefore tile the document with no gaps or overlaps. A symbol is
//! active when any selected line falls inside its span.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

/// Direction of symbol navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[serde(alias = "down")]
    Next,
    #[serde(alias = "prev", alias = "up")]
    Previous,
}

impl Step {
    fn offset(self) -> isize {
        match self {
            Step::Next => 1,
            Step::Previous => -1,
        }
    }

    /// Index to land on when nothing is active: the first symbol moving
    /// forward, the last moving backward.
    fn default_index(self, len: usize) -> usize {
        match self {
            Step::Next => 0,
            Step::Previous => len - 1,
        }
    }
}

/// Span bookkeeping for one snapshot of a document's symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSymbolTracker {
    /// Start line of every symbol, in document order.
    start_lines: Vec<usize>,
    /// Total number of lines in the document.
    total_lines: usize,
}

impl ActiveSymbolTracker {
    /// Creates a tracker from symbol start lines (ascending) and the
    /// document's line count.
    pub fn new(start_lines: Vec<usize>, total_lines: usize) -> Self {
        debug_assert!(
            start_lines.windows(2).all(|pair| pair[0] <= pair[1]),
            "symbol start lines must be in document order"
        );
        Self {
            start_lines,
            total_lines,
        }
    }

    /// Creates a tracker for `symbols`, mapping start offsets to lines with
    /// `line_of`.
    pub fn for_symbols(
        symbols: &[Symbol],
        line_of: impl Fn(usize) -> usize,
        total_lines: usize,
    ) -> Self {
        let start_lines = symbols.iter().map(|symbol| line_of(symbol.start())).collect();
        Self::new(start_lines, total_lines)
    }

    /// Returns the number of tracked symbols.
    pub fn len(&self) -> usize {
        self.start_lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.start_lines.is_empty()
    }

    /// Returns the line range owned by the symbol at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn span(&self, index: usize) -> Range<usize> {
        let start = self.start_lines[index];
        let end = self
            .start_lines
            .get(index + 1)
            .copied()
            .unwrap_or(self.total_lines);
        start..end
    }

    /// Returns true if any of `selected_lines` falls inside the span of the
    /// symbol at `index`.
    pub fn is_active(&self, index: usize, selected_lines: &[usize]) -> bool {
        let span = self.span(index);
        selected_lines.iter().any(|line| span.contains(line))
    }

    /// Returns the index of the first active symbol, if any.
    pub fn first_active(&self, selected_lines: &[usize]) -> Option<usize> {
        (0..self.len()).find(|&index| self.is_active(index, selected_lines))
    }

    /// Returns the index of the symbol one `step` away from the first active
    /// symbol, wrapping around both ends.
    ///
    /// With no active symbol, moving forward lands on the first symbol and
    /// moving backward on the last. Returns `None` only when there are no
    /// symbols.
    pub fn navigate(&self, selected_lines: &[usize], step: Step) -> Option<usize> {
        if self.is_empty() {
            return None;
        }

        let len = self.len();
        let target = match self.first_active(selected_lines) {
            Some(index) => (index as isize + step.offset()).rem_euclid(len as isize) as usize,
            None => step.default_index(len),
        };
        Some(target)
    }

    /// [`navigate`](Self::navigate), resolved to the symbol itself.
    pub fn navigate_symbol<'a>(
        &self,
        symbols: &'a [Symbol],
        selected_lines: &[usize],
        step: Step,
    ) -> Option<&'a Symbol> {
        debug_assert_eq!(symbols.len(), self.len());
        self.navigate(selected_lines, step)
            .and_then(|index| symbols.get(index))
    }
}

// =============================================================================
// Tests
// =============================================================================
