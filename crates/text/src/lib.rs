// Chunk: docs/chunks/text_positions - Offsets, regions and line lookup

//! codemap-text: position types shared by the codemap crates.
//!
//! Documents hand symbols to the outline as character offsets. The outline
//! reasons in lines (which symbol span contains the caret line), so this
//! crate provides the small vocabulary to move between the two.
//!
//! # Example
//!
//! ```
//! use codemap_text::{LineIndex, Position};
//!
//! let index = LineIndex::from_text("fn a() {}\n\nfn b() {}\n");
//! assert_eq!(index.line_count(), 4);
//! assert_eq!(index.line_at_offset(11), 2);
//! assert_eq!(index.position_of(13), Position::new(2, 2));
//! ```

mod line_index;
mod types;

pub use line_index::LineIndex;
pub use types::{Position, TextRegion};
