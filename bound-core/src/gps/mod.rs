mod gps_extractor;
mod gps_unavailable;
mod hemisphere_policy;
mod kamadak_decoder;
mod tag_decoder;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use gps_extractor::GpsExtractor;
pub use gps_unavailable::GpsUnavailable;
pub use hemisphere_policy::HemispherePolicy;
pub use kamadak_decoder::{KamadakDecoder, KamadakTagTable};
pub use tag_decoder::{DecodeError, GpsTag, TagDecoder, TagLookup, TagTable, TagValue};
