// Chunk: docs/chunks/grid_layout_planner - Window grid model and panel column carving

//! codemap-layout: window grid model and outline panel planning.
//!
//! A window's pane groups are described as a grid: ascending fractional
//! column and row offsets in `[0, 1]`, plus one rectangle of boundary
//! indices per group. The outline panel gets its space by adding one
//! full-height column on the left or right edge; every existing pane keeps
//! its proportions inside what remains.
//!
//! # Example
//!
//! ```
//! use codemap_layout::{compute_expanded_layout, Cell, GridLayout, PanelSide};
//!
//! let expanded = compute_expanded_layout(GridLayout::single(), PanelSide::Right, 0.25);
//! assert_eq!(expanded.layout.columns, vec![0.0, 0.75, 1.0]);
//! assert_eq!(expanded.layout.cells[expanded.group], Cell::new(1, 0, 2, 1));
//! ```

mod grid;
mod planner;

pub use grid::{Cell, GridLayout};
pub use planner::{compute_expanded_layout, ExpandedLayout, PanelSide};
