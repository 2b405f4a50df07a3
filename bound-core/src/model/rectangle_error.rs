use super::Axis;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RectangleError {
    #[error("{axis} parameter '{value}' is not a finite number")]
    NotFinite { axis: Axis, value: f64 },
    #[error("{axis} parameter {value} out of range [-{limit}, {limit}]", limit = .axis.limit())]
    OutOfRange { axis: Axis, value: f64 },
    #[error("deformed bounding rectangle defined: top-left ({lat_top_left}, {lon_top_left}) must be north-west of bottom-right ({lat_bottom_right}, {lon_bottom_right})")]
    Degenerate {
        lat_top_left: f64,
        lon_top_left: f64,
        lat_bottom_right: f64,
        lon_bottom_right: f64,
    },
}
