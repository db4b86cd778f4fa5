//! Reading the angle from a human-entered text.
//!
//! The parser is very flexible on formats, allowing signed decimal degrees,
//! or degrees-minutes-seconds optionally suffixed by the compass direction.
//! Any run of non-numeric characters separates the parts (`3° 37′ 09″W`, `3 37 09W`,
//! `3/37/09W`, `3-37-09W`), or the parts can be written fixed-width without
//! separators (`0033709W`). Seconds and minutes may be omitted.
//!
//! Minimal validation is done: minutes and seconds are not checked to be less than 60.

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::utils::leading_number;

use super::{
    consts::{MINUTES_IN_DEGREE, SECONDS_IN_DEGREE},
    errors::ParseDmsError,
    input::AngleInput,
};

lazy_static! {
    static ref SEPARATORS: Regex = Regex::new(r"[^0-9.,]+").expect("Separators regex is valid");
}

/// Parse the degrees or degrees/minutes/seconds into the signed decimal degrees.
///
/// ```
/// use geo_dms::parse_dms;
///
/// assert_eq!(parse_dms("40°44′55″S").unwrap(), -40.748_611_111_111_11);
/// assert_eq!(parse_dms(3.5).unwrap(), 3.5);
/// assert!(parse_dms("FRED").is_err());
/// ```
///
/// The leading `-` and the trailing `W` or `S` (in any case) negate the value.
/// Both of them applied together cancel out.
///
/// # Errors
/// When the text has no numbers in it or has more than three
/// numeric parts (degrees, minutes, seconds).
pub fn parse_dms<'a, T>(input: T) -> Result<f64, ParseDmsError>
where
    T: Into<AngleInput<'a>>,
{
    let input = input.into();
    if let Some(value) = input.as_finite() {
        return Ok(value);
    }

    let text = input.to_text();
    let text = text.trim();

    let parts: Vec<_> = SEPARATORS.split(text).filter(|p| !p.is_empty()).collect();
    let magnitude = match parts.as_slice() {
        [deg, min, sec] => {
            trace!("{text:?} parsed as degrees, minutes and seconds");
            from_dms(leading_number(deg), leading_number(min), leading_number(sec))
        }
        [deg, min] => {
            trace!("{text:?} parsed as degrees and minutes");
            from_dms(leading_number(deg), leading_number(min), 0.0)
        }
        [single] => {
            let notation = SingleNumber::detect(single);
            trace!("{text:?} parsed as {notation:?}");
            notation.degrees()
        }
        [] => {
            debug!("No numbers found in {text:?}");
            return Err(ParseDmsError::NoNumericContent);
        }
        _ => {
            debug!("Too many numeric parts in {text:?}: {}", parts.len());
            return Err(ParseDmsError::TooManyParts(parts.len()));
        }
    };

    let mut deg = magnitude;
    if text.starts_with('-') {
        deg = -deg;
    }

    if text.ends_with(['W', 'w', 'S', 's']) {
        deg = -deg;
    }

    Ok(deg)
}

fn from_dms(deg: f64, min: f64, sec: f64) -> f64 {
    deg + min / MINUTES_IN_DEGREE + sec / SECONDS_IN_DEGREE
}

/// The ways to read a number which is the only one in the text.
///
/// The digits-only string is split by its length into fixed-width fields:
/// - 4 digits: `DDMM`;
/// - 5 digits: `DDDMM`;
/// - 6 digits: `DDMMSS`;
/// - 7 digits: `DDDMMSS`.
///
/// Anything else is a decimal number of degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
enum SingleNumber<'a> {
    DegMin(&'a str, &'a str),
    DegMinSec(&'a str, &'a str, &'a str),
    Decimal(&'a str),
}

impl<'a> SingleNumber<'a> {
    fn detect(s: &'a str) -> Self {
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Self::Decimal(s);
        }

        // fields are ASCII digits, so byte offsets are safe
        match s.len() {
            4 | 5 => {
                let (deg, min) = s.split_at(s.len() - 2);
                Self::DegMin(deg, min)
            }
            6 | 7 => {
                let (deg, min_sec) = s.split_at(s.len() - 4);
                let (min, sec) = min_sec.split_at(2);
                Self::DegMinSec(deg, min, sec)
            }
            _ => Self::Decimal(s),
        }
    }

    fn degrees(self) -> f64 {
        match self {
            Self::DegMin(deg, min) => from_dms(leading_number(deg), leading_number(min), 0.0),
            Self::DegMinSec(deg, min, sec) => {
                from_dms(leading_number(deg), leading_number(min), leading_number(sec))
            }
            Self::Decimal(deg) => leading_number(deg),
        }
    }
}
