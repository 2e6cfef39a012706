//! Workbook type - the document handle

use crate::shared_strings::SharedStrings;
use crate::worksheet::Worksheet;

/// A workbook (spreadsheet document)
///
/// The workbook is the in-memory handle the container layer produces on
/// open and consumes on save. It owns the worksheets and the
/// shared-string pool.
#[derive(Debug, Clone, PartialEq)]
pub struct Workbook {
    /// Worksheets in the workbook
    worksheets: Vec<Worksheet>,
    /// Shared-string pool
    shared_strings: SharedStrings,
}

impl Workbook {
    /// Create a new workbook with one empty worksheet
    pub fn new() -> Self {
        Self {
            worksheets: vec![Worksheet::new("Sheet1")],
            shared_strings: SharedStrings::new(),
        }
    }

    /// Create an empty workbook with no worksheets
    pub fn empty() -> Self {
        Self {
            worksheets: Vec::new(),
            shared_strings: SharedStrings::new(),
        }
    }

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Get a worksheet by index
    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.worksheets.get(index)
    }

    /// Get a mutable worksheet by index
    pub fn worksheet_mut(&mut self, index: usize) -> Option<&mut Worksheet> {
        self.worksheets.get_mut(index)
    }

    /// Iterate over all worksheets
    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.worksheets.iter()
    }

    /// Add a worksheet, returning its index
    pub fn add_worksheet(&mut self, worksheet: Worksheet) -> usize {
        self.worksheets.push(worksheet);
        self.worksheets.len() - 1
    }

    /// Get the shared-string pool
    pub fn shared_strings(&self) -> &SharedStrings {
        &self.shared_strings
    }

    /// Get the mutable shared-string pool
    pub fn shared_strings_mut(&mut self) -> &mut SharedStrings {
        &mut self.shared_strings
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}
