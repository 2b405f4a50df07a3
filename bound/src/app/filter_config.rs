use std::path::Path;

use bound_core::gps::HemispherePolicy;
use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::{filter::FilterOptions, BoundError};

/// run settings read from a configuration file. every key is optional and
/// command line flags take precedence over it.
///
/// ```toml
/// parallelism = 4
/// dry_run = false
/// hemisphere_policy = "lenient"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub parallelism: Option<usize>,
    pub dry_run: Option<bool>,
    pub hemisphere_policy: Option<HemispherePolicy>,
}

impl FilterConfig {
    pub fn from_file(filepath: &Path) -> Result<Self, BoundError> {
        let config = Config::builder()
            .add_source(File::from(filepath))
            .build()
            .map_err(|e| {
                let msg = format!("file '{}' produced error: {e}", filepath.display());
                BoundError::InvalidUserInput(msg)
            })?;
        config.try_deserialize::<FilterConfig>().map_err(|e| {
            let msg = format!(
                "error reading filter configuration in '{}': {e}",
                filepath.display()
            );
            BoundError::InvalidUserInput(msg)
        })
    }

    /// filter options from this configuration, with defaults for missing keys
    pub fn options(&self) -> FilterOptions {
        let defaults = FilterOptions::default();
        FilterOptions {
            parallelism: self.parallelism.unwrap_or(defaults.parallelism),
            dry_run: self.dry_run.unwrap_or(defaults.dry_run),
            hemisphere_policy: self
                .hemisphere_policy
                .unwrap_or(defaults.hemisphere_policy),
            progress_bar: defaults.progress_bar,
        }
    }
}
