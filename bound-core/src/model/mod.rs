mod bounding_rectangle;
mod dms;
mod geo_coordinate;
mod rectangle_error;

pub use bounding_rectangle::{in_bounds, BoundingRectangle};
pub use dms::{dms_to_decimal, Axis, Hemisphere, RationalSextuple};
pub use geo_coordinate::GeoCoordinate;
pub use rectangle_error::RectangleError;
