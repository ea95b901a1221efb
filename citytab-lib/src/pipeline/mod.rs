use std::io;

use crate::error::{PipelineError, Result};
use crate::normalize::normalize_density;
use crate::record::CityRecord;
use crate::render::write_table;
use crate::report::Reporter;
use crate::sort::{sort_by_key, SortKey};
use crate::split::{split_records, SplitConfig};
use crate::transform::build_record;
use crate::validate::filter_rows;

/// Split, validate, transform, normalize and sort by normalized density
///
/// Everything in the pipeline except rendering. Rejected rows go through
/// `reporter` and never abort the run.
///
/// # Errors
///
/// Returns `InvalidInput` for empty input, before any row is processed.
pub fn process(
    data: &str,
    config: &SplitConfig,
    reporter: &mut dyn Reporter,
) -> Result<Vec<CityRecord>> {
    if data.is_empty() {
        return Err(PipelineError::InvalidInput("empty input data".to_string()));
    }

    let rows = split_records(data, config);
    let valid = filter_rows(rows, reporter);
    let mut cities: Vec<CityRecord> = valid.iter().map(build_record).collect();
    normalize_density(&mut cities);
    Ok(sort_by_key(&cities, SortKey::NormalizedDensity))
}

/// Run the full pipeline end to end, writing the rendered table to `out`
///
/// The sorted records are also returned so callers can serialize them in
/// other formats.
///
/// # Errors
///
/// Returns `InvalidInput` for empty input before any row is processed, or an
/// I/O error if writing the table fails.
pub fn run_pipeline<W: io::Write>(
    data: &str,
    config: &SplitConfig,
    reporter: &mut dyn Reporter,
    out: &mut W,
) -> Result<Vec<CityRecord>> {
    let sorted = process(data, config, reporter)?;
    write_table(&sorted, out)?;
    Ok(sorted)
}
