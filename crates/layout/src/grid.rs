// Chunk: docs/chunks/grid_layout_planner - Window grid model and panel column carving

//! Grid layout data model.
//!
//! This mirrors the layout description hosts exchange when asked to re-tile
//! a window:
//!
//! ```text
//! columns: [0.0, 0.5, 1.0]     rows: [0.0, 1.0]
//! cells:   [[0, 0, 1, 1],      group 0 spans column 0..1, row 0..1
//!           [1, 0, 2, 1]]      group 1 spans column 1..2, row 0..1
//! ```
//!
//! Cells are indices into the boundary lists, never fractions, so a layout
//! can be rescaled without touching its topology.

use serde::{Deserialize, Serialize};

// =============================================================================
// Cell
// =============================================================================

/// The rectangle occupied by one pane group, as boundary indices.
///
/// Serialized as `[col0, row0, col1, row1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 4]", into = "[usize; 4]")]
pub struct Cell {
    pub col0: usize,
    pub row0: usize,
    pub col1: usize,
    pub row1: usize,
}

impl Cell {
    pub fn new(col0: usize, row0: usize, col1: usize, row1: usize) -> Self {
        Self {
            col0,
            row0,
            col1,
            row1,
        }
    }

    /// Returns the same cell moved `by` column boundaries to the right.
    pub fn shifted_columns(self, by: usize) -> Self {
        Self {
            col0: self.col0 + by,
            col1: self.col1 + by,
            ..self
        }
    }

    fn spans_same_rows(&self, other: &Cell) -> bool {
        self.row0 == other.row0 && self.row1 == other.row1
    }

    fn spans_same_columns(&self, other: &Cell) -> bool {
        self.col0 == other.col0 && self.col1 == other.col1
    }
}

impl From<[usize; 4]> for Cell {
    fn from([col0, row0, col1, row1]: [usize; 4]) -> Self {
        Cell::new(col0, row0, col1, row1)
    }
}

impl From<Cell> for [usize; 4] {
    fn from(cell: Cell) -> Self {
        [cell.col0, cell.row0, cell.col1, cell.row1]
    }
}

// =============================================================================
// GridLayout
// =============================================================================

/// A window's pane grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    /// Ascending column boundaries; the first is 0.0 and the last 1.0.
    pub columns: Vec<f64>,
    /// Ascending row boundaries; the first is 0.0 and the last 1.0.
    pub rows: Vec<f64>,
    /// One rectangle per pane group, in group order.
    pub cells: Vec<Cell>,
}

impl GridLayout {
    /// The layout of a window with a single pane group.
    pub fn single() -> Self {
        Self {
            columns: vec![0.0, 1.0],
            rows: vec![0.0, 1.0],
            cells: vec![Cell::new(0, 0, 1, 1)],
        }
    }

    /// `count` equally wide side-by-side groups.
    pub fn columns_of(count: usize) -> Self {
        let count = count.max(1);
        let columns = (0..=count).map(|i| i as f64 / count as f64).collect();
        let cells = (0..count).map(|i| Cell::new(i, 0, i + 1, 1)).collect();
        Self {
            columns,
            rows: vec![0.0, 1.0],
            cells,
        }
    }

    /// Returns the number of pane groups described by this layout.
    pub fn group_count(&self) -> usize {
        self.cells.len()
    }

    /// Index of the last column boundary.
    pub fn last_column(&self) -> usize {
        self.columns.len().saturating_sub(1)
    }

    /// Index of the last row boundary.
    pub fn last_row(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Returns true if boundaries are strictly ascending from 0.0 and every
    /// cell references existing boundaries in ascending order.
    pub fn is_well_formed(&self) -> bool {
        fn ascending(offsets: &[f64]) -> bool {
            offsets.len() >= 2
                && offsets[0] == 0.0
                && offsets.windows(2).all(|pair| pair[0] < pair[1])
        }

        ascending(&self.columns)
            && ascending(&self.rows)
            && !self.cells.is_empty()
            && self.cells.iter().all(|cell| {
                cell.col0 < cell.col1
                    && cell.row0 < cell.row1
                    && cell.col1 <= self.last_column()
                    && cell.row1 <= self.last_row()
            })
    }

    /// Removes a pane group and contracts the grid around the hole.
    ///
    /// When the remaining groups still tile the window once unreferenced
    /// boundaries are dropped (an edge column or row, such as the outline
    /// panel's), the survivors are stretched back to `[0, 1]` and keep their
    /// original proportions. Otherwise a group sharing a full edge with the
    /// removed one grows over its space first.
    ///
    /// Returns false (and leaves the layout untouched) for an out-of-range
    /// group or when it is the only group.
    pub fn remove_group(&mut self, group: usize) -> bool {
        if group >= self.cells.len() || self.cells.len() == 1 {
            return false;
        }

        let removed = self.cells.remove(group);

        let mut contracted = self.clone();
        contracted.compact();
        if (contracted.covered_area() - 1.0).abs() < 1e-9 {
            *self = contracted;
            return true;
        }

        if let Some(neighbor) = self.cells.iter_mut().find(|cell| {
            (cell.spans_same_rows(&removed)
                && (cell.col1 == removed.col0 || cell.col0 == removed.col1))
                || (cell.spans_same_columns(&removed)
                    && (cell.row1 == removed.row0 || cell.row0 == removed.row1))
        }) {
            neighbor.col0 = neighbor.col0.min(removed.col0);
            neighbor.col1 = neighbor.col1.max(removed.col1);
            neighbor.row0 = neighbor.row0.min(removed.row0);
            neighbor.row1 = neighbor.row1.max(removed.row1);
        }
        self.compact();

        true
    }

    /// Drops boundaries no cell references and renumbers the cells.
    fn compact(&mut self) {
        let column_map = compact_axis(
            &mut self.columns,
            self.cells.iter().flat_map(|cell| [cell.col0, cell.col1]),
        );
        let row_map = compact_axis(
            &mut self.rows,
            self.cells.iter().flat_map(|cell| [cell.row0, cell.row1]),
        );

        for cell in &mut self.cells {
            cell.col0 = column_map[cell.col0];
            cell.col1 = column_map[cell.col1];
            cell.row0 = row_map[cell.row0];
            cell.row1 = row_map[cell.row1];
        }
    }

    /// Sum of the cells' areas as fractions of the window.
    fn covered_area(&self) -> f64 {
        self.cells
            .iter()
            .map(|cell| {
                (self.columns[cell.col1] - self.columns[cell.col0])
                    * (self.rows[cell.row1] - self.rows[cell.row0])
            })
            .sum()
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::single()
    }
}

/// Drops unreferenced boundaries and stretches the rest to `[0, 1]`.
///
/// Returns the old-index to new-index map. Unreferenced indices map to 0
/// and are never looked up.
fn compact_axis(offsets: &mut Vec<f64>, used: impl Iterator<Item = usize>) -> Vec<usize> {
    let mut referenced = vec![false; offsets.len()];
    for index in used {
        referenced[index] = true;
    }

    let mut map = vec![0; offsets.len()];
    let mut kept = Vec::with_capacity(offsets.len());
    for (index, offset) in offsets.iter().enumerate() {
        if referenced[index] {
            map[index] = kept.len();
            kept.push(*offset);
        }
    }

    if let (Some(&first), Some(&last)) = (kept.first(), kept.last()) {
        let span = last - first;
        if span > 0.0 && (first != 0.0 || last != 1.0) {
            for offset in kept.iter_mut() {
                *offset = (*offset - first) / span;
            }
            // Pin the edges exactly; the division may leave 0.999...
            kept[0] = 0.0;
            let end = kept.len() - 1;
            kept[end] = 1.0;
        }
    }

    *offsets = kept;
    map
}

// =============================================================================
// Tests
// =============================================================================
