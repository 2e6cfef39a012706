//! Template filling

use log::debug;

use rowfill_core::Workbook;

use crate::error::{FillError, FillResult};
use crate::{insert, scan};

/// Fills a template workbook with rows of string data
///
/// The filler locates the marker cell in the first worksheet, inserts one
/// row per data row past the first, and writes the data starting at the
/// marker's row. The defaults reproduce the export template convention:
/// the marker cell contains `"1"` somewhere in the first 2000 rows of
/// column A, and data lands from column B onward (column A is the
/// marker/checkbox column and is left untouched).
///
/// # Example
///
/// ```rust
/// use rowfill::{TemplateFiller, Workbook};
///
/// let mut workbook = Workbook::new();
/// let sheet = workbook.worksheet_mut(0).unwrap();
/// sheet.set_string_cell(5, 0, "1").unwrap();
///
/// let data = vec![
///     vec!["a".to_string(), "b".to_string()],
///     vec!["c".to_string(), "d".to_string()],
/// ];
/// TemplateFiller::new().fill(&mut workbook, &data).unwrap();
///
/// let sheet = workbook.worksheet(0).unwrap();
/// assert_eq!(sheet.cell_at(5, 1).unwrap().value.as_deref(), Some("a"));
/// assert_eq!(sheet.cell_at(6, 1).unwrap().value.as_deref(), Some("c"));
/// ```
#[derive(Debug, Clone)]
pub struct TemplateFiller {
    /// Text identifying the marker cell
    anchor_text: String,
    /// Highest row probed by the anchor scan
    scan_row_limit: u32,
    /// Column scanned for the anchor
    anchor_column: u16,
    /// First column data is written to
    data_column: u16,
}

impl TemplateFiller {
    /// Create a filler with the default template convention
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text identifying the marker cell
    pub fn with_anchor_text<S: Into<String>>(mut self, text: S) -> Self {
        self.anchor_text = text.into();
        self
    }

    /// Set the highest row the anchor scan probes
    ///
    /// The scan is linear; keep the bound tight.
    pub fn with_scan_row_limit(mut self, limit: u32) -> Self {
        self.scan_row_limit = limit;
        self
    }

    /// Set the column scanned for the anchor
    pub fn with_anchor_column(mut self, col: u16) -> Self {
        self.anchor_column = col;
        self
    }

    /// Set the first column data is written to
    pub fn with_data_column(mut self, col: u16) -> Self {
        self.data_column = col;
        self
    }

    /// Fill the workbook's first worksheet with `data_rows`
    ///
    /// Scans for the anchor, inserts `data_rows.len() - 1` rows at the
    /// anchor's row, and writes the data. The anchor cell's value is
    /// cleared by the scan. Fails with [`FillError::AnchorNotFound`] when
    /// the bounded scan is exhausted, and with
    /// [`FillError::MalformedRowData`] on empty or ragged data.
    ///
    /// Insertion renumbers the tail of the sheet, so a filler must run at
    /// most once per template instance.
    pub fn fill(&self, workbook: &mut Workbook, data_rows: &[Vec<String>]) -> FillResult<()> {
        let ws = workbook.worksheet_mut(0).ok_or(FillError::NoWorksheet)?;

        debug!(
            "scanning rows 1..={} of column {} for anchor {:?}",
            self.scan_row_limit, self.anchor_column, self.anchor_text
        );
        let (anchor_row, _) = scan::find_first_cell_with_value(
            ws,
            1..=self.scan_row_limit,
            self.anchor_column..=self.anchor_column,
            &self.anchor_text,
        )
        .ok_or_else(|| FillError::AnchorNotFound {
            text: self.anchor_text.clone(),
            rows_scanned: self.scan_row_limit,
        })?;

        debug!(
            "anchor found at row {}; writing {} data rows from column {}",
            anchor_row,
            data_rows.len(),
            self.data_column
        );
        insert::update_multiple_rows(ws, data_rows, anchor_row, self.data_column)
    }
}

impl Default for TemplateFiller {
    fn default() -> Self {
        Self {
            anchor_text: "1".into(),
            scan_row_limit: 2000,
            anchor_column: 0,
            data_column: 1,
        }
    }
}
