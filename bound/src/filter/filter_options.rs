use bound_core::gps::HemispherePolicy;
use serde::{Deserialize, Serialize};

use crate::BoundError;

/// settings of a single filter run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// number of files processed at once. 1 processes files sequentially.
    pub parallelism: usize,
    /// evaluate files without copying them
    pub dry_run: bool,
    pub hemisphere_policy: HemispherePolicy,
    /// draw a progress bar on stderr
    pub progress_bar: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            parallelism: 1,
            dry_run: false,
            hemisphere_policy: HemispherePolicy::Strict,
            progress_bar: false,
        }
    }
}

impl FilterOptions {
    pub fn validate(&self) -> Result<(), BoundError> {
        if self.parallelism == 0 {
            return Err(BoundError::InvalidUserInput(String::from(
                "parallelism must be at least 1",
            )));
        }
        Ok(())
    }
}
