//! # rowfill
//!
//! Fills tabular template documents by inserting rows at an anchor cell.
//!
//! A template sheet marks the data region with an anchor cell (by
//! convention the text `"1"` in the marker column). The filler locates
//! the anchor with a bounded scan, splices one row per data row into the
//! sheet at that position, renumbers every later row and cell reference,
//! relocates merged regions anchored on moved rows, and writes the data
//! as string values.
//!
//! Opening and saving the container document is the transport layer's
//! job; this crate operates on the in-memory [`Workbook`] model from
//! `rowfill-core`.
//!
//! ## Example
//!
//! ```rust
//! use rowfill::{TemplateFiller, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//! sheet.set_string_cell(5, 0, "1").unwrap();
//! sheet.set_string_cell(6, 0, "TOTAL").unwrap();
//!
//! let data = vec![
//!     vec!["a".to_string(), "b".to_string()],
//!     vec!["c".to_string(), "d".to_string()],
//!     vec!["e".to_string(), "f".to_string()],
//! ];
//! TemplateFiller::new().fill(&mut workbook, &data).unwrap();
//!
//! let sheet = workbook.worksheet(0).unwrap();
//! assert_eq!(sheet.cell_at(7, 1).unwrap().value.as_deref(), Some("e"));
//! assert_eq!(sheet.cell_at(8, 0).unwrap().value.as_deref(), Some("TOTAL"));
//! ```

pub mod error;
pub mod fill;
pub mod insert;
pub mod scan;

pub use error::{FillError, FillResult};
pub use fill::TemplateFiller;
pub use insert::{insert_rows, update_multiple_rows};
pub use scan::{find_all_cells_with_value, find_first_cell_with_value};

// Re-export the document model
pub use rowfill_core::{
    Cell, CellRef, CellType, RangeRef, Row, SharedString, SharedStrings, Workbook, Worksheet,
};
