pub mod gps;
pub mod model;
