use geo::Point;
use serde::{Deserialize, Serialize};

/// decimal-degree position read from an image geotag. latitude is in
/// [-90, 90] and longitude in [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<GeoCoordinate> for Point<f64> {
    fn from(value: GeoCoordinate) -> Self {
        Point::new(value.longitude, value.latitude)
    }
}

impl std::fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_is_lon_lat() {
        let point: Point<f64> = GeoCoordinate::new(39.5, -74.5).into();
        assert_eq!(point.x(), -74.5);
        assert_eq!(point.y(), 39.5);
    }

    #[test]
    fn test_serialization() {
        let coord = GeoCoordinate::new(48.8566, 2.3522);
        let json = serde_json::to_string(&coord).unwrap();
        assert_eq!(json, r#"{"latitude":48.8566,"longitude":2.3522}"#);
    }
}
