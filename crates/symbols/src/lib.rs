// Chunk: docs/chunks/symbol_tracking - Symbol model, active symbol tracking, indentation strategies

//! codemap-symbols: what the outline knows about a document's symbols.
//!
//! The main types are:
//!
//! - [`Symbol`] and [`SymbolKind`]: an immutable snapshot of one entry of a
//!   document's symbol table.
//!
//! - [`ActiveSymbolTracker`]: turns symbol start lines into spans that tile
//!   the document, answers "is this symbol under a caret" and implements
//!   circular next/previous navigation.
//!
//! - [`IndentResolver`]: the scope-keyed indentation strategy table with its
//!   three-tier fallback (scope strategy, default slot, native indentation).
//!
//! # Example
//!
//! ```
//! use codemap_symbols::{ActiveSymbolTracker, Step};
//!
//! // Symbols starting on lines 0, 5 and 10 of a 15-line document.
//! let tracker = ActiveSymbolTracker::new(vec![0, 5, 10], 15);
//! assert!(tracker.is_active(1, &[7]));
//! assert_eq!(tracker.navigate(&[7], Step::Next), Some(2));
//! assert_eq!(tracker.navigate(&[7], Step::Previous), Some(0));
//! ```

mod indent;
mod symbol;
mod tracker;

pub use indent::{
    markup_heading_indent, native_indent, IndentError, IndentResolver, IndentSource,
    IndentStrategy, HEADING_SCOPE_PREFIX, MARKDOWN_SCOPE,
};
pub use symbol::{Symbol, SymbolKind};
pub use tracker::{ActiveSymbolTracker, Step};
