use std::fmt;

use serde::{Deserialize, Serialize};

/// A geographic coordinate in degrees.
///
/// Latitude is expected in roughly `[-90, 90]` and longitude in roughly
/// `[-180, 180]`. Values outside those ranges still project to a well-defined
/// point on the globe (the trigonometry wraps), but only in-range input
/// corresponds to an accurate geographic placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Default for GeoCoordinate {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}°, {:.4}°", self.latitude, self.longitude)
    }
}
