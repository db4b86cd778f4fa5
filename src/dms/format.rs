//! Rendering the decimal degrees as a text with the degree, arcminute and arcsecond signs.

use std::{convert::Infallible, fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::{round_to, split_whole};

use super::consts::{
    ARC_MINUTE_SIGN, ARC_SECOND_SIGN, DEGREES_PLACES, DEGREE_SIGN, MINUTES_IN_DEGREE,
    MINUTES_PLACES, SECONDS_IN_DEGREE, SECONDS_IN_MINUTE, SECONDS_PLACES,
};

/// Which units the angle is split into
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DmsStyle {
    /// Decimal degrees only: `51.4778°`
    #[cfg_attr(feature = "serde", serde(rename = "d"))]
    Degrees,
    /// Whole degrees and decimal minutes: `51°28.67′`
    #[cfg_attr(feature = "serde", serde(rename = "dm"))]
    DegreesMinutes,
    /// Whole degrees, whole minutes and decimal seconds: `51°28′40″`
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "dms"))]
    DegreesMinutesSeconds,
}

impl DmsStyle {
    /// The number of decimal places used for the smallest unit if not specified otherwise
    pub fn default_decimal_places(self) -> u8 {
        match self {
            Self::Degrees => DEGREES_PLACES,
            Self::DegreesMinutes => MINUTES_PLACES,
            Self::DegreesMinutesSeconds => SECONDS_PLACES,
        }
    }

    /// Short code of the style: `d`, `dm` or `dms`
    pub fn code(self) -> &'static str {
        match self {
            Self::Degrees => "d",
            Self::DegreesMinutes => "dm",
            Self::DegreesMinutesSeconds => "dms",
        }
    }

    /// The angle (in degrees) expressed in the smallest unit of the style
    pub(crate) fn in_smallest_units(self, deg: f64) -> f64 {
        match self {
            Self::Degrees => deg,
            Self::DegreesMinutes => deg * MINUTES_IN_DEGREE,
            Self::DegreesMinutesSeconds => deg * SECONDS_IN_DEGREE,
        }
    }
}

impl FromStr for DmsStyle {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for DmsStyle {
    /// Any unknown code is treated as the `dms`
    fn from(s: &str) -> Self {
        match s {
            "d" => Self::Degrees,
            "dm" => Self::DegreesMinutes,
            _ => Self::DegreesMinutesSeconds,
        }
    }
}

impl fmt::Display for DmsStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// How to render an angle: the units and the precision.
///
/// ```
/// use geo_dms::{to_dms, DmsFormat, DmsStyle};
///
/// let deg = 51.477_811_111_111_116;
/// assert_eq!(to_dms(deg, DmsFormat::default()), "51°28′40″");
/// assert_eq!(to_dms(deg, DmsFormat::new(DmsStyle::DegreesMinutes)), "51°28.67′");
/// assert_eq!(to_dms(deg, DmsFormat::default().with_decimal_places(2)), "51°28′40.12″");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DmsFormat {
    /// Units to split the angle into
    #[cfg_attr(feature = "serde", serde(default))]
    pub style: DmsStyle,
    /// Number of decimal places for the smallest unit.
    /// When not set, the [style's default](DmsStyle::default_decimal_places) is used.
    #[cfg_attr(feature = "serde", serde(default))]
    pub decimal_places: Option<u8>,
}

impl DmsFormat {
    /// The format with the style's default precision
    pub const fn new(style: DmsStyle) -> Self {
        Self {
            style,
            decimal_places: None,
        }
    }

    /// Override the number of decimal places
    #[must_use]
    pub const fn with_decimal_places(self, places: u8) -> Self {
        Self {
            decimal_places: Some(places),
            ..self
        }
    }

    /// The number of decimal places to be actually used
    pub fn decimal_places(self) -> u8 {
        self.decimal_places
            .unwrap_or_else(|| self.style.default_decimal_places())
    }
}

impl From<DmsStyle> for DmsFormat {
    fn from(style: DmsStyle) -> Self {
        Self::new(style)
    }
}

/// Convert decimal degrees into the degrees/minutes/seconds text.
///
/// The sign of the angle is dropped and no compass direction is added,
/// use [`to_lat`](crate::to_lat), [`to_lon`](crate::to_lon)
/// or [`to_brng`](crate::to_brng) for that.
///
/// Only the smallest unit of the style is rounded, so the larger ones are
/// never carried over: `dm` may render `60′` and `dms` may render `60″`.
pub fn to_dms(deg: f64, format: DmsFormat) -> String {
    let deg = deg.abs();
    let places = format.decimal_places();

    match format.style {
        DmsStyle::Degrees => {
            let deg = round_to(deg, places);
            format!("{deg}{DEGREE_SIGN}")
        }
        DmsStyle::DegreesMinutes => {
            let (deg, fract) = split_whole(deg);
            let min = round_to(fract * MINUTES_IN_DEGREE, places);
            format!("{deg}{DEGREE_SIGN}{min}{ARC_MINUTE_SIGN}")
        }
        DmsStyle::DegreesMinutesSeconds => {
            let (deg, fract) = split_whole(deg);
            let (min, fract) = split_whole(fract * MINUTES_IN_DEGREE);
            let sec = round_to(fract * SECONDS_IN_MINUTE, places);
            format!("{deg}{DEGREE_SIGN}{min}{ARC_MINUTE_SIGN}{sec}{ARC_SECOND_SIGN}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREENWICH: f64 = 51.477_811_111_111_116;

    fn format_of(style: &str, places: Option<u8>) -> DmsFormat {
        DmsFormat {
            style: style.into(),
            decimal_places: places,
        }
    }

    #[test]
    fn style_from_code() {
        assert_eq!(DmsStyle::from("d"), DmsStyle::Degrees);
        assert_eq!(DmsStyle::from("dm"), DmsStyle::DegreesMinutes);
        assert_eq!(DmsStyle::from("dms"), DmsStyle::DegreesMinutesSeconds);
    }

    #[test]
    fn unknown_style_is_dms() {
        assert_eq!(DmsStyle::from("hms"), DmsStyle::DegreesMinutesSeconds);
        assert_eq!(DmsStyle::from(""), DmsStyle::DegreesMinutesSeconds);
        assert_eq!(DmsStyle::from("D"), DmsStyle::DegreesMinutesSeconds);
    }

    #[test]
    fn style_display() {
        assert_eq!(DmsStyle::Degrees.to_string(), "d");
        assert_eq!(DmsStyle::DegreesMinutes.to_string(), "dm");
        assert_eq!(DmsStyle::default().to_string(), "dms");
    }

    #[test]
    fn default_places() {
        assert_eq!(DmsFormat::new(DmsStyle::Degrees).decimal_places(), 4);
        assert_eq!(DmsFormat::new(DmsStyle::DegreesMinutes).decimal_places(), 2);
        assert_eq!(DmsFormat::default().decimal_places(), 0);
        assert_eq!(
            DmsFormat::new(DmsStyle::Degrees)
                .with_decimal_places(1)
                .decimal_places(),
            1
        );
    }

    #[test]
    fn seconds() {
        assert_eq!(to_dms(GREENWICH, DmsFormat::default()), "51°28′40″");
        assert_eq!(to_dms(GREENWICH, format_of("dms", None)), "51°28′40″");
        assert_eq!(to_dms(GREENWICH, format_of("dms", Some(2))), "51°28′40.12″");
    }

    #[test]
    fn minutes() {
        assert_eq!(to_dms(GREENWICH, format_of("dm", None)), "51°28.67′");
        assert_eq!(to_dms(GREENWICH, format_of("dm", Some(0))), "51°29′");
        assert_eq!(to_dms(GREENWICH, format_of("dm", Some(2))), "51°28.67′");
    }

    #[test]
    fn degrees() {
        assert_eq!(to_dms(GREENWICH, format_of("d", None)), "51.4778°");
        assert_eq!(to_dms(GREENWICH, format_of("d", Some(0))), "51°");
        assert_eq!(to_dms(GREENWICH, format_of("d", Some(4))), "51.4778°");
    }

    #[test]
    fn unknown_style_renders_seconds() {
        assert_eq!(to_dms(GREENWICH, format_of("xyz", None)), "51°28′40″");
    }

    #[test]
    fn sign_dropped() {
        assert_eq!(to_dms(-GREENWICH, DmsFormat::default()), "51°28′40″");
        assert_eq!(to_dms(-0.0, DmsFormat::new(DmsStyle::Degrees)), "0°");
    }

    #[test]
    fn no_trailing_zero_fraction() {
        assert_eq!(to_dms(51.0, format_of("d", None)), "51°");
        assert_eq!(to_dms(51.5, format_of("dm", None)), "51°30′");
        assert_eq!(to_dms(90.0, DmsFormat::default()), "90°0′0″");
        assert_eq!(to_dms(10.25, format_of("dms", Some(3))), "10°15′0″");
    }

    #[test]
    fn out_of_range_still_rendered() {
        assert_eq!(to_dms(725.5, DmsFormat::default()), "725°30′0″");
        assert_eq!(to_dms(-1000.0, format_of("d", None)), "1000°");
    }

    #[test]
    fn no_carry_into_larger_units() {
        // 0.9999999° is 59′59.99964″
        assert_eq!(to_dms(0.999_999_9, DmsFormat::default()), "0°59′60″");
    }

    #[test]
    fn smallest_units() {
        assert_eq!(DmsStyle::Degrees.in_smallest_units(1.5), 1.5);
        assert_eq!(DmsStyle::DegreesMinutes.in_smallest_units(1.5), 90.0);
        assert_eq!(DmsStyle::DegreesMinutesSeconds.in_smallest_units(1.5), 5400.0);
    }
}
