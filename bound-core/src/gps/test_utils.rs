//! generates EXIF-tagged JPEG files for tests.
//!
//! the TIFF structure is produced by kamadak-exif's writer and wrapped in a
//! JPEG APP1 segment. the result carries no image data, which is enough for
//! any reader that only looks at metadata.
use std::{io::Cursor, path::Path};

use exif::{experimental::Writer, Field, In, Rational, Tag, Value};

use super::GpsTag;
use crate::model::RationalSextuple;

const SECONDS_SCALE: u32 = 10000;

/// the GPS tags to write into a fixture. tags left as None are omitted.
#[derive(Debug, Clone, Default)]
pub struct ExifFixture {
    pub latitude: Option<RationalSextuple>,
    pub latitude_ref: Option<Vec<u8>>,
    pub longitude: Option<RationalSextuple>,
    pub longitude_ref: Option<Vec<u8>>,
}

impl ExifFixture {
    /// an EXIF segment without any GPS tags
    pub fn new() -> Self {
        Self::default()
    }

    /// all four GPS tags for a decimal-degree position, with seconds stored
    /// in 1/10000 units
    pub fn from_decimal(latitude: f64, longitude: f64) -> Self {
        let lat_ref = if latitude < 0.0 { b"S" } else { b"N" };
        let lon_ref = if longitude < 0.0 { b"W" } else { b"E" };
        Self::new()
            .with_latitude(decimal_to_dms(latitude), lat_ref)
            .with_longitude(decimal_to_dms(longitude), lon_ref)
    }

    pub fn with_latitude(mut self, dms: RationalSextuple, reference: &[u8]) -> Self {
        self.latitude = Some(dms);
        self.latitude_ref = Some(reference.to_vec());
        self
    }

    pub fn with_longitude(mut self, dms: RationalSextuple, reference: &[u8]) -> Self {
        self.longitude = Some(dms);
        self.longitude_ref = Some(reference.to_vec());
        self
    }

    pub fn without(mut self, tag: GpsTag) -> Self {
        match tag {
            GpsTag::Latitude => self.latitude = None,
            GpsTag::LatitudeRef => self.latitude_ref = None,
            GpsTag::Longitude => self.longitude = None,
            GpsTag::LongitudeRef => self.longitude_ref = None,
        }
        self
    }

    /// serializes the fixture as a minimal JPEG stream
    pub fn to_jpeg(&self) -> Vec<u8> {
        let tiff = self.to_tiff();
        let segment_len = u16::try_from(2 + EXIF_ID.len() + tiff.len())
            .expect("fixture EXIF segment exceeds JPEG segment size");

        let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
        jpeg.extend_from_slice(&segment_len.to_be_bytes());
        jpeg.extend_from_slice(EXIF_ID);
        jpeg.extend_from_slice(&tiff);
        jpeg.extend_from_slice(&[0xFF, 0xD9]);
        jpeg
    }

    pub fn write_jpeg(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_jpeg())
    }

    fn to_tiff(&self) -> Vec<u8> {
        let mut fields = vec![Field {
            tag: Tag::ImageDescription,
            ifd_num: In::PRIMARY,
            value: Value::Ascii(vec![b"bound test fixture".to_vec()]),
        }];
        if let Some(dms) = self.latitude {
            fields.push(rational_field(Tag::GPSLatitude, dms));
        }
        if let Some(reference) = &self.latitude_ref {
            fields.push(ascii_field(Tag::GPSLatitudeRef, reference));
        }
        if let Some(dms) = self.longitude {
            fields.push(rational_field(Tag::GPSLongitude, dms));
        }
        if let Some(reference) = &self.longitude_ref {
            fields.push(ascii_field(Tag::GPSLongitudeRef, reference));
        }

        let mut writer = Writer::new();
        for field in fields.iter() {
            writer.push_field(field);
        }
        let mut buf = Cursor::new(Vec::new());
        writer
            .write(&mut buf, false)
            .expect("failed to write fixture TIFF structure");
        buf.into_inner()
    }
}

const EXIF_ID: &[u8] = b"Exif\0\0";

fn rational_field(tag: Tag, dms: RationalSextuple) -> Field {
    let value = dms
        .chunks(2)
        .map(|pair| Rational {
            num: pair[0],
            denom: pair[1],
        })
        .collect();
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Rational(value),
    }
}

fn ascii_field(tag: Tag, bytes: &[u8]) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Ascii(vec![bytes.to_vec()]),
    }
}

/// unsigned degrees, minutes and scaled seconds of a decimal-degree value
fn decimal_to_dms(decimal: f64) -> RationalSextuple {
    let abs = decimal.abs();
    let degrees = abs.floor();
    let minutes_full = (abs - degrees) * 60.0;
    let minutes = minutes_full.floor();
    let seconds = ((minutes_full - minutes) * 60.0 * SECONDS_SCALE as f64).round();
    [
        degrees as u32,
        1,
        minutes as u32,
        1,
        seconds as u32,
        SECONDS_SCALE,
    ]
}
