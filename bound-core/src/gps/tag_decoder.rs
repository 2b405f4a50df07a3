use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::Axis;

/// the four GPS tags needed to locate an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GpsTag {
    Latitude,
    LatitudeRef,
    Longitude,
    LongitudeRef,
}

impl GpsTag {
    pub const ALL: [GpsTag; 4] = [
        GpsTag::Latitude,
        GpsTag::Longitude,
        GpsTag::LatitudeRef,
        GpsTag::LongitudeRef,
    ];

    pub fn axis(&self) -> Axis {
        match self {
            GpsTag::Latitude | GpsTag::LatitudeRef => Axis::Latitude,
            GpsTag::Longitude | GpsTag::LongitudeRef => Axis::Longitude,
        }
    }
}

impl std::fmt::Display for GpsTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GpsTag::Latitude => "GPSLatitude",
            GpsTag::LatitudeRef => "GPSLatitudeRef",
            GpsTag::Longitude => "GPSLongitude",
            GpsTag::LongitudeRef => "GPSLongitudeRef",
        };
        write!(f, "{name}")
    }
}

/// payload of a tag as reported by the decoder
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    /// numerator/denominator pairs
    Rationals(Vec<(u32, u32)>),
    Bytes(Vec<u8>),
}

/// outcome of looking up one tag in a decoded tag table. absence is not an
/// error, it is the normal state of most photos.
#[derive(Debug, Clone, PartialEq)]
pub enum TagLookup {
    Present(TagValue),
    Absent,
    ReadError(String),
}

#[derive(thiserror::Error, Debug)]
#[error("failed to decode tags from '{path}': {reason}")]
pub struct DecodeError {
    pub path: PathBuf,
    pub reason: String,
}

impl DecodeError {
    pub fn new(path: &Path, reason: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

/// a decoded set of image file directories
pub trait TagTable {
    fn lookup(&self, tag: GpsTag) -> TagLookup;
}

/// reads the metadata tag tables of an image file. implementations own all
/// binary EXIF/TIFF parsing.
pub trait TagDecoder {
    type Table: TagTable;

    fn decode_tags(&self, path: &Path) -> Result<Self::Table, DecodeError>;
}
