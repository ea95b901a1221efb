use crate::record::{CityRecord, RawRow};

/// Coerce a text field to a number, falling back to 0
///
/// Any parse failure, including an empty string, maps to 0.0 rather than an
/// error; a literal "NaN" also maps to 0.0 so downstream arithmetic stays
/// well-defined. This stage never fails.
#[must_use]
pub fn coerce_number(value: &str) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(n) if !n.is_nan() => n,
        _ => 0.0,
    }
}

/// Build a city entity from a validated 5-field row
///
/// Text fields are trimmed, numeric fields are coerced, and
/// `normalized_density` starts at 0 until the normalizer runs. Missing
/// fields fall back to empty text rather than panicking, but callers are
/// expected to validate field count first.
#[must_use]
pub fn build_record(row: &RawRow) -> CityRecord {
    let field = |i: usize| row.get(i).map(String::as_str).unwrap_or("");
    CityRecord::new(
        field(0).trim().to_string(),
        coerce_number(field(1)),
        coerce_number(field(2)),
        coerce_number(field(3)),
        field(4).trim().to_string(),
    )
}
