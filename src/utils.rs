//! Utilities functions which do not linked to domain

use lazy_static::lazy_static;
use regex::Regex;

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

// beyond that the scaling by 10^places no longer fits the f64 mantissa
const MAX_ROUND_PLACES: u8 = 15;

/// Round the value to the given number of decimal places.
/// The halves are rounded away from zero.
pub(crate) fn round_to(value: f64, places: u8) -> f64 {
    if places > MAX_ROUND_PLACES {
        return value;
    }

    let scale = 10_f64.powi(i32::from(places));
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }

    scaled.round() / scale
}

/// Split a number into its whole and fractional parts
pub(crate) fn split_whole(value: f64) -> (f64, f64) {
    let whole = value.trunc();
    (whole, value - whole)
}

lazy_static! {
    static ref LEADING_NUMBER: Regex =
        Regex::new(r"^\d*(?:\.\d+)?").expect("Leading number regex is valid");
}

/// Read the number at the beginning of the string,
/// ignoring anything after it. No number at all reads as zero.
pub(crate) fn leading_number(s: &str) -> f64 {
    LEADING_NUMBER
        .find(s)
        .map(|m| m.as_str())
        .filter(|prefix| !prefix.is_empty())
        .and_then(|prefix| prefix.parse().ok())
        .unwrap_or_default()
}
