use crate::record::RawRow;
use crate::report::Reporter;

/// A row is valid iff it has exactly this many fields
pub const EXPECTED_FIELDS: usize = 5;

#[must_use]
pub fn is_valid_row(row: &RawRow) -> bool {
    row.len() == EXPECTED_FIELDS
}

/// Keep only valid rows, reporting each rejected row
///
/// Rejected rows never abort the pipeline; they are surfaced through the
/// reporter for diagnostics and excluded from everything downstream.
#[must_use]
pub fn filter_rows(rows: Vec<RawRow>, reporter: &mut dyn Reporter) -> Vec<RawRow> {
    rows.into_iter()
        .filter(|row| {
            let valid = is_valid_row(row);
            if !valid {
                reporter.invalid_row(row);
            }
            valid
        })
        .collect()
}
