use serde::{Deserialize, Serialize};

/// degree, minute and second values of a GPS coordinate as three
/// numerator/denominator pairs, in the order EXIF stores them.
pub type RationalSextuple = [u32; 6];

const MINUTES_PER_DEGREE: f64 = 60.0;
const SECONDS_PER_DEGREE: f64 = 3600.0;

/// converts a degrees/minutes/seconds rational coordinate into decimal degrees
/// relative to NE, so that southern and western coordinates are negative.
///
/// any hemisphere character other than 'N' or 'E' produces a negative value,
/// including bytes that are not hemisphere indicators at all. no range checks
/// are applied and a zero denominator yields a non-finite result, so callers
/// must validate both the hemisphere and the result.
///
/// # Arguments
///
/// * `rationals` - degree, minute and second fractions
/// * `hemisphere` - hemisphere indicator character
///
/// # Returns
///
/// * the signed coordinate in decimal degrees
pub fn dms_to_decimal(rationals: &RationalSextuple, hemisphere: char) -> f64 {
    let [deg_num, deg_den, min_num, min_den, sec_num, sec_den] = rationals.map(f64::from);
    let degrees = deg_num / deg_den
        + (min_num / min_den) / MINUTES_PER_DEGREE
        + (sec_num / sec_den) / SECONDS_PER_DEGREE;
    match hemisphere {
        'N' | 'E' => degrees,
        _ => -degrees,
    }
}

/// the coordinate axis a hemisphere indicator belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// largest absolute value in decimal degrees for this axis
    pub fn limit(&self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }

    pub fn contains(&self, degrees: f64) -> bool {
        degrees.is_finite() && (-self.limit()..=self.limit()).contains(&degrees)
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// a validated hemisphere indicator as found in the GPSLatitudeRef and
/// GPSLongitudeRef tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    pub fn axis(&self) -> Axis {
        match self {
            Hemisphere::North | Hemisphere::South => Axis::Latitude,
            Hemisphere::East | Hemisphere::West => Axis::Longitude,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }
}

impl TryFrom<u8> for Hemisphere {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            b'N' => Ok(Hemisphere::North),
            b'S' => Ok(Hemisphere::South),
            b'E' => Ok(Hemisphere::East),
            b'W' => Ok(Hemisphere::West),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_degrees_north() {
        for d in [0u32, 1, 39, 45, 89, 90] {
            assert_eq!(dms_to_decimal(&[d, 1, 0, 1, 0, 1], 'N'), d as f64);
        }
    }

    #[test]
    fn test_hemisphere_signs() {
        let rationals = [74, 1, 30, 1, 0, 1];
        assert_eq!(dms_to_decimal(&rationals, 'E'), 74.5);
        assert_eq!(dms_to_decimal(&rationals, 'W'), -74.5);
        assert_eq!(dms_to_decimal(&rationals, 'N'), 74.5);
        assert_eq!(dms_to_decimal(&rationals, 'S'), -74.5);
    }

    #[test]
    fn test_unexpected_hemisphere_is_negative() {
        // lowercase and garbage bytes are not treated as N/E
        assert_eq!(dms_to_decimal(&[10, 1, 0, 1, 0, 1], 'n'), -10.0);
        assert_eq!(dms_to_decimal(&[10, 1, 0, 1, 0, 1], '\0'), -10.0);
    }

    #[test]
    fn test_minutes_and_seconds() {
        // 40° 26' 46.302" = 40.446195
        let result = dms_to_decimal(&[40, 1, 26, 1, 46302, 1000], 'N');
        assert!((result - 40.446195).abs() < 1e-9);
    }

    #[test]
    fn test_fractional_degree_rationals() {
        // some cameras store decimal degrees directly in the degree rational
        let result = dms_to_decimal(&[395, 10, 0, 1, 0, 1], 'N');
        assert!((result - 39.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_denominator_is_not_finite() {
        let result = dms_to_decimal(&[10, 0, 0, 1, 0, 1], 'N');
        assert!(!result.is_finite());
        let result = dms_to_decimal(&[10, 1, 0, 0, 0, 1], 'N');
        assert!(!result.is_finite());
    }

    #[test]
    fn test_hemisphere_try_from() {
        assert_eq!(Hemisphere::try_from(b'N'), Ok(Hemisphere::North));
        assert_eq!(Hemisphere::try_from(b'W'), Ok(Hemisphere::West));
        assert_eq!(Hemisphere::try_from(b'x'), Err(b'x'));
        assert_eq!(Hemisphere::South.axis(), Axis::Latitude);
        assert_eq!(Hemisphere::East.axis(), Axis::Longitude);
        assert_eq!(Hemisphere::West.as_char(), 'W');
    }

    #[test]
    fn test_axis_contains() {
        assert!(Axis::Latitude.contains(90.0));
        assert!(Axis::Latitude.contains(-90.0));
        assert!(!Axis::Latitude.contains(90.5));
        assert!(Axis::Longitude.contains(-180.0));
        assert!(!Axis::Longitude.contains(f64::NAN));
        assert!(!Axis::Longitude.contains(f64::INFINITY));
    }
}
