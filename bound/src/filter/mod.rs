pub mod driver;
mod filter_options;
mod filter_summary;

pub use driver::run;
pub use filter_options::FilterOptions;
pub use filter_summary::{CopyFailure, FileOutcome, FilterSummary};
