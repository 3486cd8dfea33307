// Chunk: docs/chunks/grid_layout_planner - Window grid model and panel column carving

//! Outline panel layout planning.
//!
//! Given a window's grid and the desired panel side and width, compute the
//! grid to request from the host. The planner is pure: applying the grid is
//! the caller's job.
//!
//! Both sides shrink every existing pane by the same factor `1 - width`, so
//! relative proportions survive and [`GridLayout::remove_group`] on the new
//! group restores the original grid.
//!
//! ```text
//! right, width 0.25:   [0.0, 1.0]  ->  [0.0, 0.75, 1.0]   panel = [1, 0, 2, last_row]
//! left,  width 0.25:   [0.0, 1.0]  ->  [0.0, 0.25, 1.0]   panel = [0, 0, 1, last_row]
//! ```

use serde::{Deserialize, Serialize};

use crate::grid::{Cell, GridLayout};

/// Which window edge the outline column is carved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelSide {
    Left,
    Right,
}

impl PanelSide {
    /// Returns the other edge.
    pub fn opposite(self) -> PanelSide {
        match self {
            PanelSide::Left => PanelSide::Right,
            PanelSide::Right => PanelSide::Left,
        }
    }
}

/// The result of [`compute_expanded_layout`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedLayout {
    /// The grid to request from the host.
    pub layout: GridLayout,
    /// 0-based index of the group created for the panel (its cell is the
    /// last one in `layout.cells`). This is one less than the group count,
    /// because hosts address groups by index when moving views into them.
    pub group: usize,
}

/// Computes the grid with a new full-height column for the outline panel.
///
/// # Arguments
///
/// * `grid` - The window's current grid. Must be well formed.
/// * `side` - The edge the panel column is added on.
/// * `width` - The panel's share of the window width, in `(0, 1)`.
///
/// On the right, existing boundaries are scaled by `1 - width` and a final
/// boundary at 1.0 is appended. On the left, existing boundaries are mapped
/// to `width + c * (1 - width)`, a boundary at `width` is inserted after the
/// leading 0.0, and every existing cell moves one column to the right.
pub fn compute_expanded_layout(grid: GridLayout, side: PanelSide, width: f64) -> ExpandedLayout {
    debug_assert!(grid.is_well_formed(), "malformed grid: {grid:?}");
    debug_assert!(width > 0.0 && width < 1.0, "panel width {width} not in (0, 1)");

    let mut layout = grid;
    let last_column = layout.last_column();
    let last_row = layout.last_row();
    let remaining = 1.0 - width;

    match side {
        PanelSide::Right => {
            for offset in layout.columns.iter_mut().filter(|offset| **offset > 0.0) {
                *offset *= remaining;
            }
            layout.columns.push(1.0);
            layout
                .cells
                .push(Cell::new(last_column, 0, last_column + 1, last_row));
        }
        PanelSide::Left => {
            for offset in layout.columns.iter_mut().filter(|offset| **offset > 0.0) {
                *offset = width + *offset * remaining;
            }
            // `width + 1.0 * remaining` can land a hair off 1.0
            layout.columns[last_column] = 1.0;
            layout.columns.insert(1, width);
            for cell in layout.cells.iter_mut() {
                *cell = cell.shifted_columns(1);
            }
            layout.cells.push(Cell::new(0, 0, 1, last_row));
        }
    }

    let group = layout.cells.len() - 1;
    tracing::debug!(?side, width, group, columns = ?layout.columns, "expanded layout for outline panel");

    ExpandedLayout { layout, group }
}

// =============================================================================
// Tests
// =============================================================================
