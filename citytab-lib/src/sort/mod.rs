use crate::record::CityRecord;

/// Numeric field a collection of city records can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Population,
    Area,
    Density,
    NormalizedDensity,
}

impl SortKey {
    /// Resolve a field name to a sort key
    ///
    /// Accepts kebab-case, snake_case and camelCase spellings of the
    /// normalized-density field since all three appear in practice.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "population" => Some(SortKey::Population),
            "area" => Some(SortKey::Area),
            "density" => Some(SortKey::Density),
            "normalized-density" | "normalized_density" | "normalizedDensity" => {
                Some(SortKey::NormalizedDensity)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Population => "population",
            SortKey::Area => "area",
            SortKey::Density => "density",
            SortKey::NormalizedDensity => "normalized-density",
        }
    }

    fn value(&self, city: &CityRecord) -> f64 {
        match self {
            SortKey::Population => city.population,
            SortKey::Area => city.area,
            SortKey::Density => city.density,
            SortKey::NormalizedDensity => f64::from(city.normalized_density),
        }
    }
}

/// Return a new collection ordered descending by the given field
///
/// Uses the standard stable sort, so records with equal keys keep their
/// relative order.
#[must_use]
pub fn sort_by_key(cities: &[CityRecord], key: SortKey) -> Vec<CityRecord> {
    let mut sorted = cities.to_vec();
    sorted.sort_by(|a, b| key.value(b).total_cmp(&key.value(a)));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(name: &str, density: f64, normalized: u32) -> CityRecord {
        let mut record = CityRecord::new(name.to_string(), 0.0, 0.0, density, "X".to_string());
        record.normalized_density = normalized;
        record
    }

    #[test]
    fn test_from_name_known_fields() {
        assert_eq!(SortKey::from_name("population"), Some(SortKey::Population));
        assert_eq!(SortKey::from_name("area"), Some(SortKey::Area));
        assert_eq!(SortKey::from_name("density"), Some(SortKey::Density));
        assert_eq!(
            SortKey::from_name("normalized-density"),
            Some(SortKey::NormalizedDensity)
        );
        assert_eq!(
            SortKey::from_name("normalizedDensity"),
            Some(SortKey::NormalizedDensity)
        );
    }

    #[test]
    fn test_from_name_unknown_field() {
        assert_eq!(SortKey::from_name("city"), None);
        assert_eq!(SortKey::from_name(""), None);
    }

    #[test]
    fn test_as_str_round_trip() {
        for key in [
            SortKey::Population,
            SortKey::Area,
            SortKey::Density,
            SortKey::NormalizedDensity,
        ] {
            assert_eq!(SortKey::from_name(key.as_str()), Some(key));
        }
    }

    #[test]
    fn test_sort_descending_by_normalized_density() {
        let cities = vec![
            city("A", 0.0, 25),
            city("B", 0.0, 100),
            city("C", 0.0, 50),
        ];
        let sorted = sort_by_key(&cities, SortKey::NormalizedDensity);
        let values: Vec<u32> = sorted.iter().map(|c| c.normalized_density).collect();
        assert_eq!(values, vec![100, 50, 25]);
    }

    #[test]
    fn test_sort_leaves_input_untouched() {
        let cities = vec![city("A", 1.0, 0), city("B", 9.0, 0)];
        let sorted = sort_by_key(&cities, SortKey::Density);
        assert_eq!(cities[0].city, "A");
        assert_eq!(sorted[0].city, "B");
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let cities = vec![
            city("first", 5.0, 0),
            city("second", 5.0, 0),
            city("third", 9.0, 0),
        ];
        let sorted = sort_by_key(&cities, SortKey::Density);
        assert_eq!(sorted[0].city, "third");
        assert_eq!(sorted[1].city, "first");
        assert_eq!(sorted[2].city, "second");
    }
}
