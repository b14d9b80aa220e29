use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::coord::GeoCoordinate;

/// One named place with its geographic coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CityRecord {
    pub fn coordinate(&self) -> GeoCoordinate {
        GeoCoordinate::new(self.latitude, self.longitude)
    }
}

/// The city list the globe is populated from. Defaults to a small built-in
/// set; `from_json` accepts the same records as a JSON array for callers that
/// bring their own data.
#[derive(Debug, Clone, Resource)]
pub struct CityDataset {
    pub cities: Vec<CityRecord>,
}

impl Default for CityDataset {
    fn default() -> Self {
        let cities = [
            ("Beijing", 39.90, 116.40),
            ("Tokyo", 35.68, 139.69),
            ("Sydney", -33.87, 151.21),
            ("Moscow", 55.76, 37.62),
            ("Berlin", 52.52, 13.40),
            ("New York", 40.71, -74.01),
            ("São Paulo", -23.55, -46.63),
        ]
        .into_iter()
        .map(|(name, latitude, longitude)| CityRecord {
            name: name.to_owned(),
            latitude,
            longitude,
        })
        .collect();
        Self { cities }
    }
}

impl CityDataset {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let cities = serde_json::from_str(json)?;
        Ok(Self { cities })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_list_has_seven_cities() {
        assert_eq!(CityDataset::default().cities.len(), 7);
    }

    #[test]
    fn parses_records_from_json() {
        let dataset = CityDataset::from_json(
            r#"[
                {"name": "Beijing", "latitude": 39.90, "longitude": 116.40},
                {"name": "Cairo", "latitude": 30.04, "longitude": 31.23}
            ]"#,
        )
        .unwrap();
        assert_eq!(dataset.cities.len(), 2);
        assert_eq!(dataset.cities[1].name, "Cairo");
        assert_eq!(dataset.cities[0].coordinate(), GeoCoordinate::new(39.90, 116.40));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(CityDataset::from_json(r#"[{"name": "Beijing"}]"#).is_err());
    }
}
