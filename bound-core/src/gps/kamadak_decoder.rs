use std::{fs::File, io::BufReader, path::Path};

use exif::{Exif, In, Reader, Tag, Value};

use super::{DecodeError, GpsTag, TagDecoder, TagLookup, TagTable, TagValue};

/// [`TagDecoder`] backed by kamadak-exif. supports every container the
/// crate reads (JPEG, TIFF, HEIF, PNG, WebP).
#[derive(Debug, Default, Clone, Copy)]
pub struct KamadakDecoder;

/// the EXIF attributes of a single image
pub struct KamadakTagTable {
    exif: Exif,
}

impl TagDecoder for KamadakDecoder {
    type Table = KamadakTagTable;

    fn decode_tags(&self, path: &Path) -> Result<Self::Table, DecodeError> {
        let file = File::open(path).map_err(|e| DecodeError::new(path, e.to_string()))?;
        let mut reader = BufReader::new(file);
        let exif = Reader::new()
            .read_from_container(&mut reader)
            .map_err(|e| DecodeError::new(path, e.to_string()))?;
        log::trace!(
            "{}: decoded {} EXIF field(s)",
            path.display(),
            exif.fields().len()
        );
        Ok(KamadakTagTable { exif })
    }
}

impl TagTable for KamadakTagTable {
    fn lookup(&self, tag: GpsTag) -> TagLookup {
        let field = match self.exif.get_field(exif_tag(tag), In::PRIMARY) {
            Some(field) => field,
            None => return TagLookup::Absent,
        };
        match &field.value {
            Value::Rational(rationals) => TagLookup::Present(TagValue::Rationals(
                rationals.iter().map(|r| (r.num, r.denom)).collect(),
            )),
            Value::Ascii(strings) => match strings.first() {
                Some(bytes) => TagLookup::Present(TagValue::Bytes(bytes.clone())),
                None => TagLookup::ReadError(format!("{tag} has an empty ASCII value")),
            },
            Value::Byte(bytes) => TagLookup::Present(TagValue::Bytes(bytes.clone())),
            other => TagLookup::ReadError(format!("{tag} has unexpected value {other:?}")),
        }
    }
}

fn exif_tag(tag: GpsTag) -> Tag {
    match tag {
        GpsTag::Latitude => Tag::GPSLatitude,
        GpsTag::LatitudeRef => Tag::GPSLatitudeRef,
        GpsTag::Longitude => Tag::GPSLongitude,
        GpsTag::LongitudeRef => Tag::GPSLongitudeRef,
    }
}
