//! Bounded rectangular scans over a worksheet
//!
//! Both scans walk rows then columns within inclusive bounds, in
//! row-major order, and probe only cells that exist: an absent cell has
//! no value and can never match, so nothing is materialized while
//! scanning. Cost is linear in the scanned region; callers must supply
//! tight bounds.

use std::ops::RangeInclusive;

use rowfill_core::{SharedStrings, Worksheet};

/// Find the first cell whose literal value equals `target`
///
/// Returns the (row, col) position of the match, after clearing the
/// matched cell's value to the empty string. Positions rather than cell
/// references are returned because row insertion renumbers everything at
/// or below the match; callers capture the anchor row before mutating.
pub fn find_first_cell_with_value(
    ws: &mut Worksheet,
    rows: RangeInclusive<u32>,
    cols: RangeInclusive<u16>,
    target: &str,
) -> Option<(u32, u16)> {
    let mut found = None;
    'rows: for row in ws.rows() {
        if row.index() > *rows.end() {
            break;
        }
        if row.index() < *rows.start() {
            continue;
        }
        for cell in row.cells() {
            let col = cell.cell_ref().col;
            if col > *cols.end() {
                break;
            }
            if col < *cols.start() {
                continue;
            }
            if cell.value.as_deref() == Some(target) {
                found = Some((row.index(), col));
                break 'rows;
            }
        }
    }

    let (row, col) = found?;
    if let Some(cell) = ws.cell_at_mut(row, col) {
        cell.value = Some(String::new());
    }
    Some((row, col))
}

/// Find every cell whose shared-string content contains `target`
///
/// Cell values are parsed as integer ids into the shared-string pool and
/// matched against the resolved entry's plain text or serialized form.
/// Nothing is cleared. This is a best-effort utility with no performance
/// guarantee; it is not on the insertion path.
pub fn find_all_cells_with_value(
    ws: &Worksheet,
    shared: &SharedStrings,
    rows: RangeInclusive<u32>,
    cols: RangeInclusive<u16>,
    target: &str,
) -> Vec<(u32, u16)> {
    let mut matches = Vec::new();
    for row in ws.rows() {
        if row.index() > *rows.end() {
            break;
        }
        if row.index() < *rows.start() {
            continue;
        }
        for cell in row.cells() {
            let col = cell.cell_ref().col;
            if col > *cols.end() {
                break;
            }
            if col < *cols.start() {
                continue;
            }
            let Some(text) = cell.value.as_deref() else {
                continue;
            };
            let Ok(id) = text.parse::<usize>() else {
                continue;
            };
            if shared.resolve(id).is_some_and(|item| item.matches(target)) {
                matches.push((row.index(), col));
            }
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowfill_core::SharedString;

    fn sheet_with(values: &[(u32, u16, &str)]) -> Worksheet {
        let mut ws = Worksheet::new("Test");
        for (row, col, value) in values {
            ws.set_string_cell(*row, *col, value).unwrap();
        }
        ws
    }

    #[test]
    fn test_first_match_is_row_major() {
        let mut ws = sheet_with(&[(2, 3, "x"), (3, 0, "x"), (2, 1, "x")]);

        let hit = find_first_cell_with_value(&mut ws, 1..=10, 0..=10, "x");
        assert_eq!(hit, Some((2, 1)));
    }

    #[test]
    fn test_match_clears_the_cell() {
        let mut ws = sheet_with(&[(5, 0, "1")]);

        let hit = find_first_cell_with_value(&mut ws, 1..=2000, 0..=0, "1");
        assert_eq!(hit, Some((5, 0)));
        assert_eq!(ws.cell_at(5, 0).unwrap().value.as_deref(), Some(""));

        // The cleared cell no longer matches
        assert_eq!(find_first_cell_with_value(&mut ws, 1..=2000, 0..=0, "1"), None);
    }

    #[test]
    fn test_bounds_are_honored() {
        let mut ws = sheet_with(&[(5, 1, "x"), (30, 0, "x")]);

        assert_eq!(find_first_cell_with_value(&mut ws, 1..=10, 0..=0, "x"), None);
        assert_eq!(find_first_cell_with_value(&mut ws, 1..=4, 0..=5, "x"), None);
        assert_eq!(
            find_first_cell_with_value(&mut ws, 1..=40, 0..=0, "x"),
            Some((30, 0))
        );
    }

    #[test]
    fn test_scan_does_not_materialize_cells() {
        let mut ws = sheet_with(&[(5, 0, "y")]);
        let cells_before = ws.row(5).unwrap().cell_count();

        find_first_cell_with_value(&mut ws, 1..=2000, 0..=10, "missing");

        assert_eq!(ws.row_count(), 1);
        assert_eq!(ws.row(5).unwrap().cell_count(), cells_before);
    }

    #[test]
    fn test_find_all_resolves_shared_strings() {
        let mut shared = SharedStrings::new();
        let total = shared.push(SharedString::new("Grand Total"));
        let note = shared.push(SharedString::with_raw("Note", "<r><t>Note</t></r>"));

        let mut ws = Worksheet::new("Test");
        ws.set_string_cell(1, 0, &total.to_string()).unwrap();
        ws.set_string_cell(2, 0, &note.to_string()).unwrap();
        ws.set_string_cell(3, 0, "Total").unwrap(); // not an id, skipped
        ws.set_string_cell(4, 0, "99").unwrap(); // id out of range, skipped

        let hits = find_all_cells_with_value(&ws, &shared, 1..=10, 0..=0, "Total");
        assert_eq!(hits, vec![(1, 0)]);

        let hits = find_all_cells_with_value(&ws, &shared, 1..=10, 0..=0, "<t>Note</t>");
        assert_eq!(hits, vec![(2, 0)]);
    }
}
