//! Row insertion engine
//!
//! Inserting rows below an anchor is a structural edit of the whole tail
//! of the sheet: every later row is renumbered, every cell reference in
//! those rows is rebuilt, and merged regions anchored on a moved row are
//! re-anchored. Cell references are always reconstructed from their
//! structured (column, row) pair, so renumbering row 1 can never corrupt
//! row 11.

use log::debug;

use rowfill_core::{Error, Row, Worksheet, MAX_COLS, MAX_ROWS};

use crate::error::{FillError, FillResult};

/// Insert `extra_rows` new rows starting at `anchor_row`
///
/// The row currently at `anchor_row` (the reference row) is pushed down to
/// `anchor_row + extra_rows`, along with every row below it. The new rows
/// occupy `anchor_row ..= anchor_row + extra_rows - 1` and each carries
/// `column_count + 1` empty string cells (columns `0..=column_count`)
/// whose style index is copied from the reference row's first cell.
///
/// Merged regions anchored on a shifted row move with it, column span
/// unchanged. With `extra_rows == 0` the sheet is left untouched.
///
/// Errors with [`FillError::ReferenceRowMissing`] when no row exists at
/// the anchor, and with a model error when the shift would push a row
/// past the addressable range.
pub fn insert_rows(
    ws: &mut Worksheet,
    anchor_row: u32,
    extra_rows: u32,
    column_count: u16,
) -> FillResult<()> {
    if extra_rows == 0 {
        return Ok(());
    }

    if column_count >= MAX_COLS {
        return Err(Error::ColumnOutOfBounds(column_count, MAX_COLS - 1).into());
    }

    let max_row = ws.max_row_index().unwrap_or(anchor_row);
    if max_row.checked_add(extra_rows).map_or(true, |m| m > MAX_ROWS) {
        return Err(Error::RowOutOfBounds(max_row.saturating_add(extra_rows), MAX_ROWS).into());
    }

    let style_index = ws
        .row(anchor_row)
        .ok_or(FillError::ReferenceRowMissing(anchor_row))?
        .first_cell()
        .and_then(|cell| cell.style_index);

    // Shift phase: detach merged regions anchored below the anchor before
    // moving the tail, then re-add them with their rows advanced. Detach
    // and re-add, never duplicate.
    let detached = ws.take_merged_below(anchor_row);
    let mut shifted = 0usize;
    for row in ws.rows_mut() {
        if row.index() > anchor_row {
            let new_index = row.index() + extra_rows;
            row.shift_to(new_index);
            shifted += 1;
        }
    }
    for range in detached {
        ws.merge_cells(range.shifted_rows(extra_rows))?;
    }

    debug!(
        "inserting {} rows at {}: {} rows shifted down",
        extra_rows, anchor_row, shifted
    );

    // Splice phase: the reference row is renumbered first so row indices
    // stay unique while the new rows are inserted before it. The net
    // layout is the same as splicing first and renumbering afterwards.
    let new_reference_index = anchor_row + extra_rows;
    ws.row_mut(anchor_row)
        .ok_or(FillError::ReferenceRowMissing(anchor_row))?
        .shift_to(new_reference_index);

    let mut previous: Option<u32> = None;
    for offset in 0..extra_rows {
        let index = anchor_row + offset;
        let mut row = Row::new(index);
        for col in 0..=column_count {
            row.ensure_cell(col).style_index = style_index;
        }
        match previous {
            None => ws.insert_row_before(new_reference_index, row)?,
            Some(prev) => ws.insert_row_after(prev, row)?,
        }
        previous = Some(index);
    }

    Ok(())
}

/// Insert rows for a block of data and write it
///
/// Inserts `data_rows.len() - 1` rows at `first_row` and writes every
/// value as a string into consecutive rows starting there, each row's
/// values starting at `first_col`. Every data row must have the same
/// length as the first; empty input and ragged rows fail fast with
/// [`FillError::MalformedRowData`].
pub fn update_multiple_rows(
    ws: &mut Worksheet,
    data_rows: &[Vec<String>],
    first_row: u32,
    first_col: u16,
) -> FillResult<()> {
    let first = data_rows
        .first()
        .ok_or_else(|| FillError::MalformedRowData("no data rows supplied".into()))?;
    let width = first.len();

    for (i, row) in data_rows.iter().enumerate().skip(1) {
        if row.len() != width {
            return Err(FillError::MalformedRowData(format!(
                "data row {} has {} values, expected {}",
                i,
                row.len(),
                width
            )));
        }
    }

    let column_count = u16::try_from(width)
        .ok()
        .filter(|w| *w < MAX_COLS)
        .ok_or_else(|| {
            FillError::MalformedRowData(format!("data row width {} exceeds the column limit", width))
        })?;

    if width > 0 {
        let last_col = u32::from(first_col) + width as u32 - 1;
        if last_col >= u32::from(MAX_COLS) {
            let last_col = last_col.min(u32::from(u16::MAX)) as u16;
            return Err(Error::ColumnOutOfBounds(last_col, MAX_COLS - 1).into());
        }
    }

    let extra_rows = (data_rows.len() - 1) as u32;
    insert_rows(ws, first_row, extra_rows, column_count)?;

    for (i, values) in data_rows.iter().enumerate() {
        let row_index = first_row + i as u32;
        for (j, text) in values.iter().enumerate() {
            ws.set_string_cell(row_index, first_col + j as u16, text)?;
        }
    }

    Ok(())
}
