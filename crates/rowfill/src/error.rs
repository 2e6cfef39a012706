//! Error types for the filler engine

use thiserror::Error;

/// Result type for filler operations
pub type FillResult<T> = std::result::Result<T, FillError>;

/// Errors that can occur while filling a template
#[derive(Debug, Error)]
pub enum FillError {
    /// The bounded scan did not find the anchor cell
    #[error("Anchor cell '{text}' not found in the first {rows_scanned} rows")]
    AnchorNotFound { text: String, rows_scanned: u32 },

    /// Caller-supplied data rows are empty or ragged
    #[error("Malformed row data: {0}")]
    MalformedRowData(String),

    /// No row exists at the insertion anchor
    #[error("No reference row at index {0}")]
    ReferenceRowMissing(u32),

    /// The workbook has no worksheets
    #[error("Workbook has no worksheets")]
    NoWorksheet,

    /// Model error
    #[error("Model error: {0}")]
    Core(#[from] rowfill_core::Error),
}
