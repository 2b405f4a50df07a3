use std::path::Path;

use crate::model::{dms_to_decimal, Axis, GeoCoordinate, Hemisphere, RationalSextuple};

use super::{
    GpsTag, GpsUnavailable, HemispherePolicy, KamadakDecoder, TagDecoder, TagLookup, TagTable,
    TagValue,
};

/// reads the geotag of image files through a [`TagDecoder`].
#[derive(Debug, Clone)]
pub struct GpsExtractor<D> {
    decoder: D,
    policy: HemispherePolicy,
}

impl Default for GpsExtractor<KamadakDecoder> {
    fn default() -> Self {
        Self::new(KamadakDecoder, HemispherePolicy::default())
    }
}

impl<D: TagDecoder> GpsExtractor<D> {
    pub fn new(decoder: D, policy: HemispherePolicy) -> Self {
        Self { decoder, policy }
    }

    pub fn policy(&self) -> HemispherePolicy {
        self.policy
    }

    /// extracts the decimal-degree coordinate of an image.
    ///
    /// all four GPS tags must be present and readable. partial GPS data is
    /// treated the same as no GPS data.
    ///
    /// # Arguments
    ///
    /// * `path` - image file to read
    ///
    /// # Returns
    ///
    /// * the coordinate, or the reason the image has none
    pub fn extract(&self, path: &Path) -> Result<GeoCoordinate, GpsUnavailable> {
        let table = self.decoder.decode_tags(path)?;

        let lat_dms = read_dms(&table, GpsTag::Latitude)?;
        let lon_dms = read_dms(&table, GpsTag::Longitude)?;
        let lat_ref = read_reference(&table, GpsTag::LatitudeRef)?;
        let lon_ref = read_reference(&table, GpsTag::LongitudeRef)?;

        let latitude = dms_to_decimal(&lat_dms, self.hemisphere(GpsTag::LatitudeRef, lat_ref)?);
        let longitude = dms_to_decimal(&lon_dms, self.hemisphere(GpsTag::LongitudeRef, lon_ref)?);

        if !Axis::Latitude.contains(latitude) || !Axis::Longitude.contains(longitude) {
            return Err(GpsUnavailable::OutOfRange {
                latitude,
                longitude,
            });
        }
        Ok(GeoCoordinate::new(latitude, longitude))
    }

    fn hemisphere(&self, tag: GpsTag, byte: u8) -> Result<char, GpsUnavailable> {
        match self.policy {
            HemispherePolicy::Lenient => Ok(byte as char),
            HemispherePolicy::Strict => match Hemisphere::try_from(byte) {
                Ok(h) if h.axis() == tag.axis() => Ok(h.as_char()),
                _ => Err(GpsUnavailable::MalformedHemisphere { tag, byte }),
            },
        }
    }
}

fn lookup_present<T: TagTable>(table: &T, tag: GpsTag) -> Result<TagValue, GpsUnavailable> {
    match table.lookup(tag) {
        TagLookup::Present(value) => Ok(value),
        TagLookup::Absent => Err(GpsUnavailable::TagAbsent(tag)),
        TagLookup::ReadError(reason) => Err(GpsUnavailable::TagUnreadable { tag, reason }),
    }
}

fn read_dms<T: TagTable>(table: &T, tag: GpsTag) -> Result<RationalSextuple, GpsUnavailable> {
    match lookup_present(table, tag)? {
        TagValue::Rationals(r) if r.len() >= 3 => {
            Ok([r[0].0, r[0].1, r[1].0, r[1].1, r[2].0, r[2].1])
        }
        TagValue::Rationals(r) => Err(GpsUnavailable::TagUnreadable {
            tag,
            reason: format!("expected 3 rationals, found {}", r.len()),
        }),
        TagValue::Bytes(_) => Err(GpsUnavailable::TagUnreadable {
            tag,
            reason: String::from("expected rationals, found bytes"),
        }),
    }
}

fn read_reference<T: TagTable>(table: &T, tag: GpsTag) -> Result<u8, GpsUnavailable> {
    match lookup_present(table, tag)? {
        TagValue::Bytes(bytes) => bytes
            .first()
            .copied()
            .ok_or_else(|| GpsUnavailable::TagUnreadable {
                tag,
                reason: String::from("empty hemisphere reference"),
            }),
        TagValue::Rationals(_) => Err(GpsUnavailable::TagUnreadable {
            tag,
            reason: String::from("expected bytes, found rationals"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gps::{test_utils::ExifFixture, DecodeError};
    use std::collections::HashMap;

    /// in-memory decoder keyed by file name
    #[derive(Default)]
    struct MockDecoder {
        tables: HashMap<String, HashMap<GpsTag, TagLookup>>,
    }

    struct MockTable(HashMap<GpsTag, TagLookup>);

    impl TagTable for MockTable {
        fn lookup(&self, tag: GpsTag) -> TagLookup {
            self.0.get(&tag).cloned().unwrap_or(TagLookup::Absent)
        }
    }

    impl TagDecoder for MockDecoder {
        type Table = MockTable;

        fn decode_tags(&self, path: &Path) -> Result<Self::Table, DecodeError> {
            let name = path.to_string_lossy().to_string();
            self.tables
                .get(&name)
                .cloned()
                .map(MockTable)
                .ok_or_else(|| DecodeError::new(path, "no EXIF segment"))
        }
    }

    fn complete_tags(lat_ref: &[u8], lon_ref: &[u8]) -> HashMap<GpsTag, TagLookup> {
        HashMap::from([
            (
                GpsTag::Latitude,
                TagLookup::Present(TagValue::Rationals(vec![(39, 1), (30, 1), (0, 1)])),
            ),
            (
                GpsTag::Longitude,
                TagLookup::Present(TagValue::Rationals(vec![(74, 1), (30, 1), (0, 1)])),
            ),
            (
                GpsTag::LatitudeRef,
                TagLookup::Present(TagValue::Bytes(lat_ref.to_vec())),
            ),
            (
                GpsTag::LongitudeRef,
                TagLookup::Present(TagValue::Bytes(lon_ref.to_vec())),
            ),
        ])
    }

    fn extractor_with(
        tags: HashMap<GpsTag, TagLookup>,
        policy: HemispherePolicy,
    ) -> GpsExtractor<MockDecoder> {
        let decoder = MockDecoder {
            tables: HashMap::from([(String::from("photo.jpg"), tags)]),
        };
        GpsExtractor::new(decoder, policy)
    }

    #[test]
    fn test_complete_tags() {
        let extractor = extractor_with(complete_tags(b"N", b"W"), HemispherePolicy::Strict);
        let coord = extractor.extract(Path::new("photo.jpg")).unwrap();
        assert_eq!(coord, GeoCoordinate::new(39.5, -74.5));
    }

    #[test]
    fn test_decode_failure_is_unavailable() {
        let extractor = extractor_with(complete_tags(b"N", b"W"), HemispherePolicy::Strict);
        let result = extractor.extract(Path::new("other.jpg"));
        assert!(matches!(result, Err(GpsUnavailable::DecodeFailed(_))));
    }

    #[test]
    fn test_any_missing_tag_is_unavailable() {
        for missing in GpsTag::ALL {
            let mut tags = complete_tags(b"N", b"W");
            tags.remove(&missing);
            let extractor = extractor_with(tags, HemispherePolicy::Strict);
            match extractor.extract(Path::new("photo.jpg")) {
                Err(GpsUnavailable::TagAbsent(tag)) => assert_eq!(tag, missing),
                other => panic!("expected {missing} to be absent, found {other:?}"),
            }
        }
    }

    #[test]
    fn test_read_error_is_unavailable() {
        let mut tags = complete_tags(b"N", b"W");
        tags.insert(
            GpsTag::Longitude,
            TagLookup::ReadError(String::from("truncated IFD entry")),
        );
        let extractor = extractor_with(tags, HemispherePolicy::Strict);
        let result = extractor.extract(Path::new("photo.jpg"));
        assert!(matches!(
            result,
            Err(GpsUnavailable::TagUnreadable {
                tag: GpsTag::Longitude,
                ..
            })
        ));
    }

    #[test]
    fn test_short_rational_array_is_unavailable() {
        let mut tags = complete_tags(b"N", b"W");
        tags.insert(
            GpsTag::Latitude,
            TagLookup::Present(TagValue::Rationals(vec![(39, 1), (30, 1)])),
        );
        let extractor = extractor_with(tags, HemispherePolicy::Strict);
        assert!(extractor.extract(Path::new("photo.jpg")).is_err());
    }

    #[test]
    fn test_swapped_value_types_are_unavailable() {
        let mut tags = complete_tags(b"N", b"W");
        tags.insert(
            GpsTag::LatitudeRef,
            TagLookup::Present(TagValue::Rationals(vec![(1, 1)])),
        );
        let extractor = extractor_with(tags, HemispherePolicy::Strict);
        assert!(extractor.extract(Path::new("photo.jpg")).is_err());

        let mut tags = complete_tags(b"N", b"W");
        tags.insert(
            GpsTag::Latitude,
            TagLookup::Present(TagValue::Bytes(b"39".to_vec())),
        );
        let extractor = extractor_with(tags, HemispherePolicy::Strict);
        assert!(extractor.extract(Path::new("photo.jpg")).is_err());
    }

    #[test]
    fn test_empty_reference_is_unavailable() {
        let extractor = extractor_with(complete_tags(b"", b"W"), HemispherePolicy::Lenient);
        let result = extractor.extract(Path::new("photo.jpg"));
        assert!(matches!(
            result,
            Err(GpsUnavailable::TagUnreadable {
                tag: GpsTag::LatitudeRef,
                ..
            })
        ));
    }

    #[test]
    fn test_strict_policy_rejects_malformed_hemisphere() {
        let extractor = extractor_with(complete_tags(b"?", b"W"), HemispherePolicy::Strict);
        let result = extractor.extract(Path::new("photo.jpg"));
        assert!(matches!(
            result,
            Err(GpsUnavailable::MalformedHemisphere {
                tag: GpsTag::LatitudeRef,
                byte: b'?'
            })
        ));
    }

    #[test]
    fn test_strict_policy_rejects_wrong_axis() {
        // E is a valid hemisphere but not for latitude
        let extractor = extractor_with(complete_tags(b"E", b"W"), HemispherePolicy::Strict);
        assert!(extractor.extract(Path::new("photo.jpg")).is_err());
    }

    #[test]
    fn test_lenient_policy_reads_malformed_hemisphere_as_negative() {
        let extractor = extractor_with(complete_tags(b"?", b"E"), HemispherePolicy::Lenient);
        let coord = extractor.extract(Path::new("photo.jpg")).unwrap();
        assert_eq!(coord, GeoCoordinate::new(-39.5, 74.5));
    }

    #[test]
    fn test_zero_denominator_is_unavailable() {
        let mut tags = complete_tags(b"N", b"W");
        tags.insert(
            GpsTag::Latitude,
            TagLookup::Present(TagValue::Rationals(vec![(39, 0), (30, 1), (0, 1)])),
        );
        let extractor = extractor_with(tags, HemispherePolicy::Strict);
        let result = extractor.extract(Path::new("photo.jpg"));
        assert!(matches!(result, Err(GpsUnavailable::OutOfRange { .. })));
    }

    #[test]
    fn test_out_of_range_latitude_is_unavailable() {
        let mut tags = complete_tags(b"N", b"W");
        tags.insert(
            GpsTag::Latitude,
            TagLookup::Present(TagValue::Rationals(vec![(95, 1), (0, 1), (0, 1)])),
        );
        let extractor = extractor_with(tags, HemispherePolicy::Strict);
        let result = extractor.extract(Path::new("photo.jpg"));
        assert!(matches!(result, Err(GpsUnavailable::OutOfRange { .. })));
    }

    #[test]
    fn test_extract_from_jpeg_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sydney.jpg");
        ExifFixture::from_decimal(-33.8688, 151.2093)
            .write_jpeg(&path)
            .unwrap();

        let coord = GpsExtractor::default().extract(&path).unwrap();
        assert!((coord.latitude - -33.8688).abs() < 1e-6);
        assert!((coord.longitude - 151.2093).abs() < 1e-6);
    }

    #[test]
    fn test_extract_hand_computed_dms() {
        // 40° 26' 46.302" N, 79° 58' 56.0" W
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pittsburgh.jpg");
        ExifFixture::new()
            .with_latitude([40, 1, 26, 1, 46302, 1000], b"N")
            .with_longitude([79, 1, 58, 1, 56, 1], b"W")
            .write_jpeg(&path)
            .unwrap();

        let coord = GpsExtractor::default().extract(&path).unwrap();
        let expected_lat = 40.0 + 26.0 / 60.0 + 46.302 / 3600.0;
        let expected_lon = -(79.0 + 58.0 / 60.0 + 56.0 / 3600.0);
        assert!((coord.latitude - expected_lat).abs() < 1e-12);
        assert!((coord.longitude - expected_lon).abs() < 1e-12);
    }

    #[test]
    fn test_extract_from_jpeg_missing_one_tag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.jpg");
        ExifFixture::from_decimal(39.5, -74.5)
            .without(GpsTag::LongitudeRef)
            .write_jpeg(&path)
            .unwrap();

        let result = GpsExtractor::default().extract(&path);
        assert!(matches!(
            result,
            Err(GpsUnavailable::TagAbsent(GpsTag::LongitudeRef))
        ));
    }

    #[test]
    fn test_extract_from_file_without_exif() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readme.txt");
        std::fs::write(&path, b"plain text").unwrap();

        let result = GpsExtractor::default().extract(&path);
        assert!(matches!(result, Err(GpsUnavailable::DecodeFailed(_))));
    }
}
