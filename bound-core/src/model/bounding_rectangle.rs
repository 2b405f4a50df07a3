use geo::{coord, Rect};
use serde::{Deserialize, Serialize};

use super::{Axis, GeoCoordinate, RectangleError};

/// a latitude/longitude rectangle on a north-up map centered on the Greenwich
/// meridian. the top-left corner is the north-west corner and the bottom-right
/// corner is the south-east corner. rectangles spanning the antimeridian are
/// not supported.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingRectangle {
    pub lat_top_left: f64,
    pub lon_top_left: f64,
    pub lat_bottom_right: f64,
    pub lon_bottom_right: f64,
}

impl BoundingRectangle {
    /// builds a rectangle from its two corners, rejecting non-finite or
    /// out-of-range values and rectangles whose top-left corner is not
    /// strictly north-west of the bottom-right corner.
    pub fn new(
        lat_top_left: f64,
        lon_top_left: f64,
        lat_bottom_right: f64,
        lon_bottom_right: f64,
    ) -> Result<Self, RectangleError> {
        let params = [
            (Axis::Latitude, lat_top_left),
            (Axis::Longitude, lon_top_left),
            (Axis::Latitude, lat_bottom_right),
            (Axis::Longitude, lon_bottom_right),
        ];
        for (axis, value) in params {
            if !value.is_finite() {
                return Err(RectangleError::NotFinite { axis, value });
            }
            if !axis.contains(value) {
                return Err(RectangleError::OutOfRange { axis, value });
            }
        }
        if lat_top_left <= lat_bottom_right || lon_top_left >= lon_bottom_right {
            return Err(RectangleError::Degenerate {
                lat_top_left,
                lon_top_left,
                lat_bottom_right,
                lon_bottom_right,
            });
        }
        Ok(Self {
            lat_top_left,
            lon_top_left,
            lat_bottom_right,
            lon_bottom_right,
        })
    }

    /// inclusive test on all four edges
    pub fn contains(&self, coord: &GeoCoordinate) -> bool {
        coord.latitude <= self.lat_top_left
            && coord.longitude >= self.lon_top_left
            && coord.latitude >= self.lat_bottom_right
            && coord.longitude <= self.lon_bottom_right
    }

    /// the rectangle as a geo Rect with x = longitude and y = latitude
    pub fn as_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.lon_top_left, y: self.lat_bottom_right },
            coord! { x: self.lon_bottom_right, y: self.lat_top_left },
        )
    }
}

impl std::fmt::Display for BoundingRectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[({}, {}), ({}, {})]",
            self.lat_top_left, self.lon_top_left, self.lat_bottom_right, self.lon_bottom_right
        )
    }
}

/// tests whether an image coordinate falls within the rectangle. images
/// without a usable coordinate are never in bounds.
pub fn in_bounds(coord: Option<&GeoCoordinate>, rect: &BoundingRectangle) -> bool {
    match coord {
        Some(c) => rect.contains(c),
        None => false,
    }
}
