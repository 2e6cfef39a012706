//! Worksheet type

use crate::address::{CellRef, RangeRef};
use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::row::Row;
use crate::{MAX_COLS, MAX_ROWS};

/// A worksheet (single sheet in a workbook)
///
/// Rows are kept sorted by index with at most one row per index. Lookups
/// that can miss return `Option`; the `ensure_*` methods are the only ones
/// that create rows or cells, so callers always know whether they are
/// reading or materializing.
#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Rows, sorted by index
    rows: Vec<Row>,
    /// Merged regions
    merged: Vec<RangeRef>,
}

impl Worksheet {
    /// Create a new empty worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
            merged: Vec::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    // === Row Access ===

    /// Rows in index order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Iterate over rows mutably, in index order
    ///
    /// Callers renumbering rows must keep the sort order intact; shifting
    /// a tail of the sheet by a constant does.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut Row> {
        self.rows.iter_mut()
    }

    /// Get a row by index
    pub fn row(&self, index: u32) -> Option<&Row> {
        self.row_position(index).ok().map(|pos| &self.rows[pos])
    }

    /// Get a mutable row by index
    pub fn row_mut(&mut self, index: u32) -> Option<&mut Row> {
        match self.row_position(index) {
            Ok(pos) => Some(&mut self.rows[pos]),
            Err(_) => None,
        }
    }

    /// Get the row at an index, creating an empty one at its sorted
    /// position if absent
    ///
    /// `index` must be a valid 1-based row number.
    pub fn ensure_row(&mut self, index: u32) -> &mut Row {
        debug_assert!(index >= 1 && index <= MAX_ROWS);
        match self.row_position(index) {
            Ok(pos) => &mut self.rows[pos],
            Err(pos) => {
                self.rows.insert(pos, Row::new(index));
                &mut self.rows[pos]
            }
        }
    }

    /// Insert a row immediately before an existing row
    pub fn insert_row_before(&mut self, existing: u32, row: Row) -> Result<()> {
        let pos = self
            .row_position(existing)
            .map_err(|_| Error::RowNotFound(existing))?;
        self.rows.insert(pos, row);
        Ok(())
    }

    /// Insert a row immediately after an existing row
    pub fn insert_row_after(&mut self, existing: u32, row: Row) -> Result<()> {
        let pos = self
            .row_position(existing)
            .map_err(|_| Error::RowNotFound(existing))?;
        self.rows.insert(pos + 1, row);
        Ok(())
    }

    /// Highest row index in the sheet, if any rows exist
    pub fn max_row_index(&self) -> Option<u32> {
        self.rows.last().map(|r| r.index())
    }

    /// Number of rows in the sheet
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the sheet has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    // === Cell Access ===

    /// Get a cell by row and column, without creating anything
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&Cell> {
        self.row(row).and_then(|r| r.cell(col))
    }

    /// Get a mutable cell by row and column, without creating anything
    pub fn cell_at_mut(&mut self, row: u32, col: u16) -> Option<&mut Cell> {
        self.row_mut(row).and_then(|r| r.cell_mut(col))
    }

    /// Get the cell at a position, materializing the row and the cell on
    /// demand
    ///
    /// Created cells carry an empty formula placeholder.
    pub fn ensure_cell(&mut self, row: u32, col: u16) -> Result<&mut Cell> {
        self.validate_position(row, col)?;
        Ok(self.ensure_row(row).ensure_cell(col))
    }

    /// Write a literal string value into a cell, materializing it if needed
    ///
    /// Clears any formula placeholder and tags the cell as a string.
    pub fn set_string_cell(&mut self, row: u32, col: u16, text: &str) -> Result<()> {
        self.ensure_cell(row, col)?.set_string_value(text);
        Ok(())
    }

    // === Merged Regions ===

    /// Get merged regions
    pub fn merged_regions(&self) -> &[RangeRef] {
        &self.merged
    }

    /// Merge a range of cells
    pub fn merge_cells(&mut self, range: RangeRef) -> Result<()> {
        for existing in &self.merged {
            if range.overlaps(existing) {
                return Err(Error::MergedCellConflict(range.to_string()));
            }
        }
        self.merged.push(range);
        Ok(())
    }

    /// Merge a single-row span starting at `left` and extending
    /// `column_span` columns to the right
    pub fn merge_across(&mut self, left: CellRef, column_span: u16) -> Result<()> {
        let right_col = u32::from(left.col) + u32::from(column_span);
        if right_col >= u32::from(MAX_COLS) {
            let right_col = right_col.min(u32::from(u16::MAX)) as u16;
            return Err(Error::ColumnOutOfBounds(right_col, MAX_COLS - 1));
        }
        self.merge_cells(RangeRef::new(left, CellRef::new(left.row, right_col as u16)))
    }

    /// Unmerge a range; returns whether a matching region was removed
    pub fn unmerge_cells(&mut self, range: &RangeRef) -> bool {
        match self.merged.iter().position(|existing| existing == range) {
            Some(pos) => {
                self.merged.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Re-anchor every merged region starting on `old_row` to `new_row`
    ///
    /// Matching regions are removed and re-added with their row components
    /// moved by the same distance; height and column span are unchanged.
    pub fn relocate_merged_rows(&mut self, old_row: u32, new_row: u32) {
        if old_row == new_row {
            return;
        }
        let mut pos = 0;
        while pos < self.merged.len() {
            if self.merged[pos].start.row == old_row {
                let range = self.merged.remove(pos);
                self.merged.push(range.rebased_rows(old_row, new_row));
            } else {
                pos += 1;
            }
        }
    }

    /// Detach and return every merged region anchored strictly below
    /// `anchor_row`
    ///
    /// Used by the row insertion engine: detached regions are re-added
    /// after the shift phase with their rows advanced.
    pub fn take_merged_below(&mut self, anchor_row: u32) -> Vec<RangeRef> {
        let mut detached = Vec::new();
        self.merged.retain(|range| {
            if range.start.row > anchor_row {
                detached.push(*range);
                false
            } else {
                true
            }
        });
        detached
    }

    // === Internal ===

    fn row_position(&self, index: u32) -> std::result::Result<usize, usize> {
        self.rows.binary_search_by_key(&index, |r| r.index())
    }

    /// Validate a cell position
    fn validate_position(&self, row: u32, col: u16) -> Result<()> {
        if row == 0 || row > MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS));
        }
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_worksheet() {
        let ws = Worksheet::new("Test");
        assert_eq!(ws.name(), "Test");
        assert!(ws.is_empty());
        assert!(ws.max_row_index().is_none());
    }

    #[test]
    fn test_ensure_row_keeps_sort_order() {
        let mut ws = Worksheet::new("Test");
        ws.ensure_row(5);
        ws.ensure_row(2);
        ws.ensure_row(9);
        ws.ensure_row(5);

        let indices: Vec<u32> = ws.rows().iter().map(|r| r.index()).collect();
        assert_eq!(indices, vec![2, 5, 9]);
        assert_eq!(ws.max_row_index(), Some(9));
    }

    #[test]
    fn test_lookup_does_not_create() {
        let mut ws = Worksheet::new("Test");
        assert!(ws.row(3).is_none());
        assert!(ws.cell_at(3, 0).is_none());
        assert!(ws.is_empty());

        ws.ensure_row(3);
        assert!(ws.row(3).is_some());
        assert!(ws.cell_at(3, 0).is_none()); // row exists, cell does not
    }

    #[test]
    fn test_set_then_read_cell() {
        let mut ws = Worksheet::new("Test");
        ws.set_string_cell(12, 2, "hello").unwrap();

        let cell = ws.cell_at(12, 2).unwrap();
        assert_eq!(cell.value.as_deref(), Some("hello"));
        assert_eq!(cell.cell_ref().to_string(), "C12");
        assert_eq!(cell.formula, None);
    }

    #[test]
    fn test_position_validation() {
        let mut ws = Worksheet::new("Test");
        assert!(ws.set_string_cell(0, 0, "x").is_err()); // rows are 1-based
        assert!(ws.set_string_cell(crate::MAX_ROWS + 1, 0, "x").is_err());
        assert!(ws.set_string_cell(1, crate::MAX_COLS, "x").is_err());
        assert!(ws.is_empty()); // nothing materialized on failure
    }

    #[test]
    fn test_insert_row_before_and_after() {
        let mut ws = Worksheet::new("Test");
        ws.ensure_row(10);

        ws.insert_row_before(10, Row::new(8)).unwrap();
        ws.insert_row_after(8, Row::new(9)).unwrap();

        let indices: Vec<u32> = ws.rows().iter().map(|r| r.index()).collect();
        assert_eq!(indices, vec![8, 9, 10]);

        assert!(matches!(
            ws.insert_row_before(99, Row::new(98)),
            Err(Error::RowNotFound(99))
        ));
    }

    #[test]
    fn test_merge_cells_rejects_overlap() {
        let mut ws = Worksheet::new("Test");
        ws.merge_cells(RangeRef::parse("A1:C3").unwrap()).unwrap();
        assert_eq!(ws.merged_regions().len(), 1);

        assert!(ws.merge_cells(RangeRef::parse("B2:D4").unwrap()).is_err());
        assert_eq!(ws.merged_regions().len(), 1);
    }

    #[test]
    fn test_merge_across() {
        let mut ws = Worksheet::new("Test");
        ws.merge_across(CellRef::new(5, 1), 2).unwrap();

        assert_eq!(ws.merged_regions()[0].to_string(), "B5:D5");
        assert!(ws.merge_across(CellRef::new(1, crate::MAX_COLS - 1), 1).is_err());
    }

    #[test]
    fn test_unmerge_cells() {
        let mut ws = Worksheet::new("Test");
        let range = RangeRef::parse("A1:B2").unwrap();
        ws.merge_cells(range).unwrap();

        assert!(ws.unmerge_cells(&range));
        assert!(!ws.unmerge_cells(&range));
        assert!(ws.merged_regions().is_empty());
    }

    #[test]
    fn test_relocate_merged_rows() {
        let mut ws = Worksheet::new("Test");
        ws.merge_cells(RangeRef::parse("A10:C10").unwrap()).unwrap();
        ws.merge_cells(RangeRef::parse("B20:B21").unwrap()).unwrap();

        ws.relocate_merged_rows(10, 13);

        let rendered: Vec<String> = ws.merged_regions().iter().map(|r| r.to_string()).collect();
        assert!(rendered.contains(&"A13:C13".to_string()));
        assert!(rendered.contains(&"B20:B21".to_string()));
    }

    #[test]
    fn test_take_merged_below() {
        let mut ws = Worksheet::new("Test");
        ws.merge_cells(RangeRef::parse("A2:C2").unwrap()).unwrap();
        ws.merge_cells(RangeRef::parse("A7:C7").unwrap()).unwrap();
        ws.merge_cells(RangeRef::parse("A9:B10").unwrap()).unwrap();

        let detached = ws.take_merged_below(5);

        assert_eq!(detached.len(), 2);
        assert_eq!(ws.merged_regions().len(), 1);
        assert_eq!(ws.merged_regions()[0].to_string(), "A2:C2");
    }
}
