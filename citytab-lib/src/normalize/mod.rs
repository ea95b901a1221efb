use crate::record::CityRecord;

/// Maximum density across the collection; 0.0 when the collection is empty
#[must_use]
pub fn max_density(cities: &[CityRecord]) -> f64 {
    cities.iter().map(|city| city.density).fold(0.0, f64::max)
}

/// Assign each record its density as a percentage of the maximum density
///
/// Rounding is half-away-from-zero (`f64::round`). When the maximum density
/// is 0 (all-zero densities, or an empty collection) every record's
/// `normalized_density` is 0 and no division happens. The computation is
/// pure given the `density` fields, so re-running it is idempotent.
pub fn normalize_density(cities: &mut [CityRecord]) {
    let max = max_density(cities);
    if max == 0.0 {
        for city in cities.iter_mut() {
            city.normalized_density = 0;
        }
        return;
    }

    for city in cities.iter_mut() {
        city.normalized_density = (city.density * 100.0 / max).round() as u32;
    }
}
