//! # rowfill-core
//!
//! Document model for the rowfill template filler.
//!
//! This crate provides the in-memory sheet structures that the filler
//! engine mutates:
//! - [`CellRef`] and [`RangeRef`] - cell addressing and rectangular ranges
//! - [`Cell`], [`Row`], [`Worksheet`] - the sheet aggregate
//! - [`SharedStrings`] - the shared-string indirection pool
//! - [`Workbook`] - the document handle
//!
//! ## Example
//!
//! ```rust
//! use rowfill_core::Workbook;
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! // Rows are 1-based, columns are 0-based
//! sheet.set_string_cell(1, 0, "Hello").unwrap();
//! assert_eq!(sheet.cell_at(1, 0).unwrap().value.as_deref(), Some("Hello"));
//! ```

pub mod address;
pub mod cell;
pub mod error;
pub mod row;
pub mod shared_strings;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use address::{CellRef, RangeRef};
pub use cell::{Cell, CellType};
pub use error::{Error, Result};
pub use row::Row;
pub use shared_strings::{SharedString, SharedStrings};
pub use workbook::Workbook;
pub use worksheet::Worksheet;

/// Maximum row number in a worksheet (rows are 1-based)
pub const MAX_ROWS: u32 = 1_048_576;

/// Number of addressable columns (0-based indices `0..MAX_COLS`)
///
/// The column codec produces at most two letters, which caps the column
/// space at "ZZ".
pub const MAX_COLS: u16 = 702;
