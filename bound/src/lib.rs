pub mod app;
pub mod error;
pub mod filter;
pub mod util;

pub use error::BoundError;
