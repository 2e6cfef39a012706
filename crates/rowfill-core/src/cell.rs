//! Cell types

use crate::address::CellRef;

/// Cell data type tag
///
/// The template model only carries string cells; the tag exists so the
/// container serializer knows how to emit the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellType {
    /// Literal string value
    #[default]
    String,
}

/// A single cell
///
/// Cells belong to exactly one [`Row`](crate::Row). The reference is kept
/// structurally consistent with the owning row's index via
/// [`Cell::renumber`]; it is never rewritten by string substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Rendered coordinate of this cell
    cell_ref: CellRef,
    /// Literal string value, if any
    pub value: Option<String>,
    /// Formula placeholder (present but empty on freshly created cells)
    pub formula: Option<String>,
    /// Data type tag
    pub data_type: CellType,
    /// Style index copied from the template, if any
    pub style_index: Option<u32>,
}

impl Cell {
    /// Create an empty cell with a formula placeholder
    pub fn new(cell_ref: CellRef) -> Self {
        Self {
            cell_ref,
            value: None,
            formula: Some(String::new()),
            data_type: CellType::String,
            style_index: None,
        }
    }

    /// Get the cell's reference
    pub fn cell_ref(&self) -> CellRef {
        self.cell_ref
    }

    /// Replace the cell's content with a literal string value
    ///
    /// Clears the formula placeholder and tags the cell as a string,
    /// matching the update semantics of the container model.
    pub fn set_string_value<S: Into<String>>(&mut self, text: S) {
        self.formula = None;
        self.value = Some(text.into());
        self.data_type = CellType::String;
    }

    /// Move the cell to a new row, rebuilding the reference from the
    /// structured (column, row) pair
    pub fn renumber(&mut self, row: u32) {
        self.cell_ref = CellRef::new(row, self.cell_ref.col);
    }
}
