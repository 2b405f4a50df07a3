use serde::{Deserialize, Serialize};

/// how hemisphere reference bytes are interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HemispherePolicy {
    /// the reference must be N or S for latitude and E or W for longitude.
    /// any other byte leaves the image without a coordinate.
    #[default]
    Strict,
    /// any byte other than N or E is read as south or west.
    Lenient,
}
