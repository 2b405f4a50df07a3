mod bound_app;
mod filter_config;

pub use bound_app::{BoundApp, FilterRun};
pub use filter_config::FilterConfig;
