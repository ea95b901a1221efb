use serde::Serialize;

/// A row of raw text fields as produced by the splitter; no inherent validity
pub type RawRow = Vec<String>;

/// A city entity built from one validated row
///
/// Numeric fields are `f64` because coercion preserves fractional input
/// ("3.5" parses to 3.5). `normalized_density` is an integer percentage in
/// [0, 100] and stays 0 until the normalizer has run over the collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityRecord {
    pub city: String,
    pub population: f64,
    pub area: f64,
    pub density: f64,
    pub country: String,
    pub normalized_density: u32,
}

impl CityRecord {
    #[must_use]
    pub fn new(city: String, population: f64, area: f64, density: f64, country: String) -> Self {
        CityRecord {
            city,
            population,
            area,
            density,
            country,
            normalized_density: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_starts_unnormalized() {
        let record = CityRecord::new(
            "Delhi".to_string(),
            16_787_941.0,
            1484.0,
            11_313.0,
            "India".to_string(),
        );
        assert_eq!(record.normalized_density, 0);
        assert_eq!(record.city, "Delhi");
        assert_eq!(record.country, "India");
    }

    #[test]
    fn test_record_equality() {
        let a = CityRecord::new("A".to_string(), 1.0, 2.0, 3.0, "X".to_string());
        let b = CityRecord::new("A".to_string(), 1.0, 2.0, 3.0, "X".to_string());
        assert_eq!(a, b);
    }

    #[test]
    fn test_serialize_camel_case() {
        let record = CityRecord::new("A".to_string(), 1.0, 2.0, 3.0, "X".to_string());
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"normalizedDensity\":0"));
        assert!(json.contains("\"population\":1.0"));
    }
}
