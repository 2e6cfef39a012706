//! Row type

use crate::address::CellRef;
use crate::cell::Cell;

/// A row of cells
///
/// Cells are kept sorted by column with at most one cell per column; the
/// collection is sparse, so any column may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    index: u32,
    cells: Vec<Cell>,
}

impl Row {
    /// Create a new empty row
    pub fn new(index: u32) -> Self {
        Self {
            index,
            cells: Vec::new(),
        }
    }

    /// Row number (1-based)
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Cells in column order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over cells mutably, in column order
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// Get a cell by column index
    pub fn cell(&self, col: u16) -> Option<&Cell> {
        self.cells
            .binary_search_by_key(&col, |c| c.cell_ref().col)
            .ok()
            .map(|pos| &self.cells[pos])
    }

    /// Get a mutable cell by column index
    pub fn cell_mut(&mut self, col: u16) -> Option<&mut Cell> {
        self.cells
            .binary_search_by_key(&col, |c| c.cell_ref().col)
            .ok()
            .map(move |pos| &mut self.cells[pos])
    }

    /// Get the cell at a column, creating an empty one if absent
    ///
    /// Created cells carry an empty formula placeholder and are inserted
    /// at their sorted position.
    pub fn ensure_cell(&mut self, col: u16) -> &mut Cell {
        match self.cells.binary_search_by_key(&col, |c| c.cell_ref().col) {
            Ok(pos) => &mut self.cells[pos],
            Err(pos) => {
                self.cells.insert(pos, Cell::new(CellRef::new(self.index, col)));
                &mut self.cells[pos]
            }
        }
    }

    /// First cell of the row (lowest column), if any
    pub fn first_cell(&self) -> Option<&Cell> {
        self.cells.first()
    }

    /// Number of cells in the row
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has any cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Renumber the row, rebuilding every cell's reference from its
    /// structured (column, row) pair
    pub fn shift_to(&mut self, new_index: u32) {
        self.index = new_index;
        for cell in &mut self.cells {
            cell.renumber(new_index);
        }
    }
}
