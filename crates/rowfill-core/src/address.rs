//! Cell reference and range types

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// A cell reference (e.g., "A1", "C12")
///
/// References combine column letters with a 1-based row number, matching
/// the human-readable addressing of the container format. Columns are
/// stored as 0-based indices (A=0, B=1, ..., ZZ=701).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRef {
    /// Row number (1-based)
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ..., ZZ=701)
    pub col: u16,
}

impl CellRef {
    /// Create a new cell reference
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Parse a cell reference from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use rowfill_core::CellRef;
    ///
    /// let cell_ref = CellRef::parse("A1").unwrap();
    /// assert_eq!(cell_ref.row, 1);
    /// assert_eq!(cell_ref.col, 0);
    ///
    /// let cell_ref = CellRef::parse("C12").unwrap();
    /// assert_eq!(cell_ref.row, 12);
    /// assert_eq!(cell_ref.col, 2);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty reference".into()));
        }

        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (letters, digits) = s.split_at(split);

        if letters.is_empty() {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }

        let col = Self::letters_to_column(letters)?;

        if digits.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }

        let row: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        if row > MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS));
        }

        Ok(Self { row, col })
    }

    /// Convert a column index to letters (0 = A, 25 = Z, 26 = AA, 51 = AZ)
    ///
    /// Indices below 26 map to a single letter. For 26 and above the first
    /// letter is `'A' + col / 26 - 1` and the second `'A' + col % 26`,
    /// which caps the column space at two letters ("ZZ" = 701). Callers
    /// must keep `col` below [`MAX_COLS`].
    pub fn column_to_letters(col: u16) -> String {
        debug_assert!(col < MAX_COLS, "column {} beyond two-letter range", col);

        if col < 26 {
            return char::from(b'A' + col as u8).to_string();
        }

        let first = char::from(b'A' + (col / 26) as u8 - 1);
        let second = char::from(b'A' + (col % 26) as u8);
        let mut letters = String::with_capacity(2);
        letters.push(first);
        letters.push(second);
        letters
    }

    /// Convert column letters to an index (A = 0, Z = 25, AA = 26, ZZ = 701)
    pub fn letters_to_column(letters: &str) -> Result<u16> {
        if letters.is_empty() {
            return Err(Error::InvalidAddress("empty column letters".into()));
        }

        let mut col: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidAddress(format!(
                    "invalid column letter '{}'",
                    c
                )));
            }
            col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
        }

        let col = col - 1; // Convert to 0-based

        if col >= MAX_COLS as u32 {
            return Err(Error::ColumnOutOfBounds(col.min(u16::MAX as u32) as u16, MAX_COLS - 1));
        }

        Ok(col as u16)
    }

    /// Format as an A1-style string
    pub fn to_a1_string(&self) -> String {
        let mut result = Self::column_to_letters(self.col);
        result.push_str(&self.row.to_string());
        result
    }

    /// Create a range from this reference to another
    pub fn to(&self, other: CellRef) -> RangeRef {
        RangeRef::new(*self, other)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A rectangular range of cells (e.g., "A1:C3"), used for merged regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeRef {
    /// Start reference (top-left)
    pub start: CellRef,
    /// End reference (bottom-right)
    pub end: CellRef,
}

impl RangeRef {
    /// Create a new range, normalized so start is top-left
    pub fn new(start: CellRef, end: CellRef) -> Self {
        let (start_row, end_row) = if start.row <= end.row {
            (start.row, end.row)
        } else {
            (end.row, start.row)
        };

        let (start_col, end_col) = if start.col <= end.col {
            (start.col, end.col)
        } else {
            (end.col, start.col)
        };

        Self {
            start: CellRef::new(start_row, start_col),
            end: CellRef::new(end_row, end_col),
        }
    }

    /// Create a range from row/column indices
    pub fn from_indices(start_row: u32, start_col: u16, end_row: u32, end_col: u16) -> Self {
        Self::new(
            CellRef::new(start_row, start_col),
            CellRef::new(end_row, end_col),
        )
    }

    /// Create a single-cell range
    pub fn single(cell_ref: CellRef) -> Self {
        Self {
            start: cell_ref,
            end: cell_ref,
        }
    }

    /// Parse a range from A1:C3 notation (a bare reference is a single-cell range)
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some(colon_pos) = s.find(':') {
            let start = CellRef::parse(&s[..colon_pos])
                .map_err(|_| Error::InvalidRange(s.to_string()))?;
            let end = CellRef::parse(&s[colon_pos + 1..])
                .map_err(|_| Error::InvalidRange(s.to_string()))?;
            Ok(Self::new(start, end))
        } else {
            let cell_ref = CellRef::parse(s).map_err(|_| Error::InvalidRange(s.to_string()))?;
            Ok(Self::single(cell_ref))
        }
    }

    /// Check if a cell is within this range
    pub fn contains(&self, cell_ref: &CellRef) -> bool {
        cell_ref.row >= self.start.row
            && cell_ref.row <= self.end.row
            && cell_ref.col >= self.start.col
            && cell_ref.col <= self.end.col
    }

    /// Check if this range overlaps with another
    pub fn overlaps(&self, other: &RangeRef) -> bool {
        self.start.row <= other.end.row
            && self.end.row >= other.start.row
            && self.start.col <= other.end.col
            && self.end.col >= other.start.col
    }

    /// Number of rows in the range
    pub fn row_count(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    /// Number of columns in the range
    pub fn col_count(&self) -> u16 {
        self.end.col - self.start.col + 1
    }

    /// Return the range moved down by `delta` rows, columns unchanged
    pub fn shifted_rows(&self, delta: u32) -> RangeRef {
        RangeRef::from_indices(
            self.start.row.saturating_add(delta).min(MAX_ROWS),
            self.start.col,
            self.end.row.saturating_add(delta).min(MAX_ROWS),
            self.end.col,
        )
    }

    /// Return the range with its anchor row moved from `old_row` to
    /// `new_row`, preserving its height and column span
    pub fn rebased_rows(&self, old_row: u32, new_row: u32) -> RangeRef {
        let delta = i64::from(new_row) - i64::from(old_row);
        let shift = |row: u32| -> u32 {
            (i64::from(row) + delta).clamp(1, i64::from(MAX_ROWS)) as u32
        };
        RangeRef::from_indices(
            shift(self.start.row),
            self.start.col,
            shift(self.end.row),
            self.end.col,
        )
    }

    /// Format as an A1:C3 string
    pub fn to_a1_string(&self) -> String {
        if self.start == self.end {
            self.start.to_a1_string()
        } else {
            format!("{}:{}", self.start.to_a1_string(), self.end.to_a1_string())
        }
    }
}

impl fmt::Display for RangeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for RangeRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_to_letters() {
        assert_eq!(CellRef::column_to_letters(0), "A");
        assert_eq!(CellRef::column_to_letters(1), "B");
        assert_eq!(CellRef::column_to_letters(25), "Z");
        assert_eq!(CellRef::column_to_letters(26), "AA");
        assert_eq!(CellRef::column_to_letters(27), "AB");
        assert_eq!(CellRef::column_to_letters(51), "AZ");
        assert_eq!(CellRef::column_to_letters(52), "BA");
        assert_eq!(CellRef::column_to_letters(701), "ZZ");
    }

    #[test]
    fn test_single_letters_cover_the_alphabet() {
        for col in 0..26u16 {
            let letters = CellRef::column_to_letters(col);
            assert_eq!(letters.len(), 1);
            assert_eq!(letters.as_bytes()[0], b'A' + col as u8);
        }
    }

    #[test]
    fn test_letters_to_column() {
        assert_eq!(CellRef::letters_to_column("A").unwrap(), 0);
        assert_eq!(CellRef::letters_to_column("Z").unwrap(), 25);
        assert_eq!(CellRef::letters_to_column("AA").unwrap(), 26);
        assert_eq!(CellRef::letters_to_column("AZ").unwrap(), 51);
        assert_eq!(CellRef::letters_to_column("ZZ").unwrap(), 701);

        // Case insensitive
        assert_eq!(CellRef::letters_to_column("a").unwrap(), 0);
        assert_eq!(CellRef::letters_to_column("aa").unwrap(), 26);

        // Beyond the two-letter ceiling
        assert!(CellRef::letters_to_column("AAA").is_err());
    }

    #[test]
    fn test_codec_round_trip() {
        for col in 0..super::MAX_COLS {
            let letters = CellRef::column_to_letters(col);
            assert_eq!(CellRef::letters_to_column(&letters).unwrap(), col);
        }
    }

    #[test]
    fn test_cell_ref_parse() {
        let cell_ref = CellRef::parse("A1").unwrap();
        assert_eq!(cell_ref.row, 1);
        assert_eq!(cell_ref.col, 0);

        let cell_ref = CellRef::parse("C12").unwrap();
        assert_eq!(cell_ref.row, 12);
        assert_eq!(cell_ref.col, 2);

        let cell_ref = CellRef::parse("ZZ1048576").unwrap();
        assert_eq!(cell_ref.row, 1_048_576);
        assert_eq!(cell_ref.col, 701);
    }

    #[test]
    fn test_cell_ref_parse_errors() {
        assert!(CellRef::parse("").is_err());
        assert!(CellRef::parse("A").is_err());
        assert!(CellRef::parse("1").is_err());
        assert!(CellRef::parse("A0").is_err()); // Rows are 1-based
        assert!(CellRef::parse("A1048577").is_err()); // Row too large
        assert!(CellRef::parse("AAA1").is_err()); // Column too large
    }

    #[test]
    fn test_cell_ref_display() {
        assert_eq!(CellRef::new(1, 0).to_string(), "A1");
        assert_eq!(CellRef::new(100, 2).to_string(), "C100");
        assert_eq!(CellRef::new(7, 27).to_string(), "AB7");
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for (row, col) in [(1u32, 0u16), (11, 0), (12, 2), (2000, 51), (999, 701)] {
            let cell_ref = CellRef::new(row, col);
            assert_eq!(CellRef::parse(&cell_ref.to_string()).unwrap(), cell_ref);
        }
    }

    #[test]
    fn test_range_parse() {
        let range = RangeRef::parse("A1:B2").unwrap();
        assert_eq!(range.start, CellRef::new(1, 0));
        assert_eq!(range.end, CellRef::new(2, 1));

        // Single cell
        let range = RangeRef::parse("C3").unwrap();
        assert_eq!(range.start, CellRef::new(3, 2));
        assert_eq!(range.end, CellRef::new(3, 2));

        // Reversed corners normalize
        let range = RangeRef::parse("B2:A1").unwrap();
        assert_eq!(range.start, CellRef::new(1, 0));
        assert_eq!(range.end, CellRef::new(2, 1));
    }

    #[test]
    fn test_range_contains_and_overlaps() {
        let range = RangeRef::parse("B2:D4").unwrap();

        assert!(range.contains(&CellRef::new(2, 1))); // B2
        assert!(range.contains(&CellRef::new(4, 3))); // D4
        assert!(!range.contains(&CellRef::new(1, 0))); // A1
        assert!(!range.contains(&CellRef::new(5, 1))); // B5

        assert!(range.overlaps(&RangeRef::parse("D4:E6").unwrap()));
        assert!(!range.overlaps(&RangeRef::parse("E5:F6").unwrap()));
    }

    #[test]
    fn test_range_shifted_rows() {
        let range = RangeRef::parse("A10:C12").unwrap();
        let shifted = range.shifted_rows(3);
        assert_eq!(shifted.to_string(), "A13:C15");
        assert_eq!(shifted.col_count(), range.col_count());
        assert_eq!(shifted.row_count(), range.row_count());
    }

    #[test]
    fn test_range_rebased_rows() {
        let range = RangeRef::parse("B7:D8").unwrap();
        assert_eq!(range.rebased_rows(7, 10).to_string(), "B10:D11");
        assert_eq!(range.rebased_rows(7, 3).to_string(), "B3:D4");
    }
}
