//! NMEA `$GPWPL` waypoint sentence serialization
//!
//! Each point becomes one line:
//!
//! ```text
//! $GPWPL,<lat>,<N|S>,<lon>,<E|W>,<name>*XX
//! ```
//!
//! Lines are joined by `\n` without a trailing newline. The `*XX` suffix is a fixed
//! placeholder: no checksum is computed, so consumers must treat every sentence as
//! unchecksummed.

use crate::NamedPoint;
use std::fmt::Write;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const SENTENCE_ID: &str = "$GPWPL";
const CHECKSUM_PLACEHOLDER: &str = "*XX";

/// Which coordinate of a position is being encoded
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn hemisphere(self, negative: bool) -> char {
        match (self, negative) {
            (Axis::Latitude, false) => 'N',
            (Axis::Latitude, true) => 'S',
            (Axis::Longitude, false) => 'E',
            (Axis::Longitude, true) => 'W',
        }
    }
}

/// Algorithm used to turn decimal degrees into the degrees/minutes text fields
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoordinateEncoding {
    /// Compatibility encoding, kept bit-for-bit for existing consumers.
    ///
    /// Degrees are rounded (not truncated) before the remainder is taken, the
    /// remainder is scaled by `100 / 60`, and longitude degrees use two digits.
    #[default]
    Legacy,
    /// Conventional `DDMM.mm` / `DDDMM.mm` rounded to hundredths of a minute
    Standard,
}

/// Text fields for one axis of one point
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoordinateFields {
    pub degrees: String,
    pub minutes: String,
    pub minutes_fraction: String,
    pub hemisphere: char,
}

impl CoordinateFields {
    /// `DDMM.mm,H` as it appears inside a sentence
    pub fn to_sentence_field(&self) -> String {
        format!(
            "{}{}.{},{}",
            self.degrees, self.minutes, self.minutes_fraction, self.hemisphere
        )
    }
}

/// Encode one signed decimal-degree value into sentence fields
pub fn encode_coordinate(value: f64, axis: Axis, encoding: CoordinateEncoding) -> CoordinateFields {
    let hemisphere = axis.hemisphere(value < 0.0);
    let magnitude = value.abs();

    match encoding {
        CoordinateEncoding::Legacy => encode_legacy(magnitude, hemisphere),
        CoordinateEncoding::Standard => encode_standard(magnitude, axis, hemisphere),
    }
}

/// Round half up for non-negative values (add 0.5, truncate towards zero)
#[inline]
fn round_half_up(value: f64) -> i64 {
    (value + 0.5) as i64
}

fn encode_legacy(magnitude: f64, hemisphere: char) -> CoordinateFields {
    let degrees = round_half_up(magnitude) % 100;
    // Remainder is measured against the rounded degrees, not the truncated ones
    let remainder = (magnitude - degrees as f64).abs();
    let minutes_value = (remainder * 100.0) / 60.0;
    let minutes = round_half_up(minutes_value) % 100;
    let fraction = (minutes_value - minutes as f64 + 0.5) as i64;

    CoordinateFields {
        degrees: format!("{degrees:02}"),
        minutes: format!("{minutes:02}"),
        minutes_fraction: format!("{fraction:02}"),
        hemisphere,
    }
}

fn encode_standard(magnitude: f64, axis: Axis, hemisphere: char) -> CoordinateFields {
    // Work in whole hundredths of a minute so rounding carries into minutes and degrees
    let hundredths = (magnitude * 6000.0).round() as i64;
    let degrees = hundredths / 6000;
    let minutes = (hundredths % 6000) / 100;
    let fraction = hundredths % 100;

    let degrees = match axis {
        Axis::Latitude => format!("{degrees:02}"),
        Axis::Longitude => format!("{degrees:03}"),
    };

    CoordinateFields {
        degrees,
        minutes: format!("{minutes:02}"),
        minutes_fraction: format!("{fraction:02}"),
        hemisphere,
    }
}

/// Build the sentence for a single point
pub fn encode_sentence(point: &NamedPoint, encoding: CoordinateEncoding) -> String {
    let latitude = encode_coordinate(point.position.latitude(), Axis::Latitude, encoding);
    let longitude = encode_coordinate(point.position.longitude(), Axis::Longitude, encoding);

    let mut sentence = String::with_capacity(48 + point.name.len());
    // Writing into a String cannot fail
    let _ = write!(
        sentence,
        "{SENTENCE_ID},{},{},{}{CHECKSUM_PLACEHOLDER}",
        latitude.to_sentence_field(),
        longitude.to_sentence_field(),
        point.name
    );
    sentence
}

/// Serialize points as newline-separated `$GPWPL` sentences
///
/// An empty point list yields an empty string.
pub fn encode_nmea(points: &[NamedPoint], encoding: CoordinateEncoding) -> String {
    points
        .iter()
        .map(|point| encode_sentence(point, encoding))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn fields(value: f64, axis: Axis, encoding: CoordinateEncoding) -> String {
        encode_coordinate(value, axis, encoding).to_sentence_field()
    }

    #[test]
    fn test_hemispheres() {
        for encoding in [CoordinateEncoding::Legacy, CoordinateEncoding::Standard] {
            assert_eq!(encode_coordinate(1.0, Axis::Latitude, encoding).hemisphere, 'N');
            assert_eq!(encode_coordinate(0.0, Axis::Latitude, encoding).hemisphere, 'N');
            assert_eq!(encode_coordinate(-0.001, Axis::Latitude, encoding).hemisphere, 'S');
            assert_eq!(encode_coordinate(-89.0, Axis::Latitude, encoding).hemisphere, 'S');
            assert_eq!(encode_coordinate(179.9, Axis::Longitude, encoding).hemisphere, 'E');
            assert_eq!(encode_coordinate(0.0, Axis::Longitude, encoding).hemisphere, 'E');
            assert_eq!(encode_coordinate(-0.5, Axis::Longitude, encoding).hemisphere, 'W');
        }
    }

    #[test]
    fn test_legacy_whole_degrees() {
        let legacy = CoordinateEncoding::Legacy;
        assert_eq!(fields(0.0, Axis::Latitude, legacy), "0000.00,N");
        assert_eq!(fields(-10.0, Axis::Latitude, legacy), "1000.00,S");
        assert_eq!(fields(5.0, Axis::Longitude, legacy), "0500.00,E");
    }

    #[test]
    fn test_legacy_rounds_degrees_before_remainder() {
        let legacy = CoordinateEncoding::Legacy;
        // 50.5 rounds to 51; remainder 0.5 -> 0.8333 -> minutes 01, fraction 00
        assert_eq!(fields(50.5, Axis::Latitude, legacy), "5101.00,N");
        // 4.25 rounds to 4; remainder 0.25 -> 0.41667 -> minutes 00, fraction 00
        assert_eq!(fields(-4.25, Axis::Longitude, legacy), "0400.00,W");
        // 1.75 rounds to 2; remainder 0.25 folded back with abs()
        assert_eq!(fields(1.75, Axis::Latitude, legacy), "0200.00,N");
    }

    #[test]
    fn test_legacy_minutes_field() {
        // 0.375 degrees -> 0.625 -> minutes round to 01, fraction truncate(0.125) = 00
        assert_eq!(
            fields(0.375, Axis::Latitude, CoordinateEncoding::Legacy),
            "0001.00,N"
        );
        // 0.25 degrees -> 0.41667 -> minutes 00
        assert_eq!(
            fields(0.25, Axis::Latitude, CoordinateEncoding::Legacy),
            "0000.00,N"
        );
    }

    #[test]
    fn test_legacy_longitude_wraps_to_two_digits() {
        // 100 degrees: degrees field wraps to 00 and the remainder spills into minutes
        let encoded = encode_coordinate(100.0, Axis::Longitude, CoordinateEncoding::Legacy);
        assert_eq!(encoded.degrees, "00");
        assert_eq!(encoded.minutes, "67");
        assert_eq!(encoded.minutes_fraction, "100");
    }

    #[test]
    fn test_legacy_fields_two_digits() {
        for tenths in -994..=994 {
            let value = tenths as f64 / 10.0;
            for axis in [Axis::Latitude, Axis::Longitude] {
                let encoded = encode_coordinate(value, axis, CoordinateEncoding::Legacy);
                assert_eq!(encoded.degrees.len(), 2, "{value}");
                assert_eq!(encoded.minutes.len(), 2, "{value}");
                assert_eq!(encoded.minutes_fraction.len(), 2, "{value}");
            }
        }
    }

    #[test]
    fn test_standard_fields() {
        let standard = CoordinateEncoding::Standard;
        assert_eq!(fields(50.5, Axis::Latitude, standard), "5030.00,N");
        assert_eq!(fields(-4.25, Axis::Longitude, standard), "00415.00,W");
        assert_eq!(fields(-10.0, Axis::Latitude, standard), "1000.00,S");
        assert_eq!(fields(100.0, Axis::Longitude, standard), "10000.00,E");
        assert_eq!(fields(12.3456, Axis::Latitude, standard), "1220.74,N");
    }

    #[test]
    fn test_standard_rounding_carries() {
        let standard = CoordinateEncoding::Standard;
        // 59.9999 minutes rounds up into the next degree
        assert_eq!(
            fields(10.0 + 59.9999 / 60.0, Axis::Latitude, standard),
            "1100.00,N"
        );
        assert_eq!(
            fields(-(179.0 + 59.9999 / 60.0), Axis::Longitude, standard),
            "18000.00,W"
        );
    }

    #[test]
    fn test_sentence_layout() {
        let point = NamedPoint::new(Position::new(-10.0, 5.0, 3.0), "Bravo");
        assert_eq!(
            encode_sentence(&point, CoordinateEncoding::Legacy),
            "$GPWPL,1000.00,S,0500.00,E,Bravo*XX"
        );
    }

    #[test]
    fn test_join_without_trailing_newline() {
        let points = vec![
            NamedPoint::new(Position::new(1.0, 2.0, 0.0), "A"),
            NamedPoint::new(Position::new(3.0, 4.0, 0.0), "B"),
            NamedPoint::new(Position::new(5.0, 6.0, 0.0), "C"),
        ];
        let nmea = encode_nmea(&points, CoordinateEncoding::Legacy);

        assert_eq!(nmea.matches('\n').count(), 2);
        assert!(!nmea.starts_with('\n'));
        assert!(!nmea.ends_with('\n'));
        assert!(nmea.lines().all(|line| line.starts_with("$GPWPL,")));
        assert!(nmea.lines().all(|line| line.ends_with("*XX")));
    }

    #[test]
    fn test_empty_points() {
        assert_eq!(encode_nmea(&[], CoordinateEncoding::Legacy), "");
        assert_eq!(encode_nmea(&[], CoordinateEncoding::Standard), "");
    }
}
