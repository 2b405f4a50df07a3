use super::{DecodeError, GpsTag};

/// reasons an image has no usable geotag. these are expected outcomes that
/// exclude a file from filtering, never failures of a run.
#[derive(thiserror::Error, Debug)]
pub enum GpsUnavailable {
    #[error(transparent)]
    DecodeFailed(#[from] DecodeError),
    #[error("tag {0} is absent")]
    TagAbsent(GpsTag),
    #[error("tag {tag} could not be read: {reason}")]
    TagUnreadable { tag: GpsTag, reason: String },
    #[error("tag {tag} holds malformed hemisphere byte 0x{byte:02x}")]
    MalformedHemisphere { tag: GpsTag, byte: u8 },
    #[error("coordinate ({latitude}, {longitude}) is outside of the valid range")]
    OutOfRange { latitude: f64, longitude: f64 },
}
