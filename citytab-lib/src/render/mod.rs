use std::fmt::Write as _;
use std::io;

use crate::record::CityRecord;

const CITY_WIDTH: usize = 18;
const POPULATION_WIDTH: usize = 10;
const AREA_WIDTH: usize = 8;
const DENSITY_WIDTH: usize = 8;
const COUNTRY_WIDTH: usize = 18;
const NORMALIZED_WIDTH: usize = 6;

/// Format one record as a fixed-width table line
///
/// City is left-aligned, everything else right-aligned. Widths are minimums:
/// a value longer than its column widens the line instead of being
/// truncated. Integral numbers print without a decimal point.
#[must_use]
pub fn format_row(city: &CityRecord) -> String {
    let mut line = String::new();
    let _ = write!(line, "{:<CITY_WIDTH$}", city.city);
    let _ = write!(line, "{:>POPULATION_WIDTH$}", city.population);
    let _ = write!(line, "{:>AREA_WIDTH$}", city.area);
    let _ = write!(line, "{:>DENSITY_WIDTH$}", city.density);
    let _ = write!(line, "{:>COUNTRY_WIDTH$}", city.country);
    let _ = write!(line, "{:>NORMALIZED_WIDTH$}", city.normalized_density);
    line
}

/// Render the whole collection, one line per record, in input order
#[must_use]
pub fn render_table(cities: &[CityRecord]) -> Vec<String> {
    cities.iter().map(format_row).collect()
}

/// Write the rendered table to a stream
///
/// # Errors
///
/// Returns an I/O error if writing to the stream fails.
pub fn write_table<W: io::Write>(cities: &[CityRecord], out: &mut W) -> io::Result<()> {
    for city in cities {
        writeln!(out, "{}", format_row(city))?;
    }
    Ok(())
}
