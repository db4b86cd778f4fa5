use std::borrow::Cow;

use num_traits::ToPrimitive;

use crate::enum_trivial_from_impl;

/// Anything that can be read as an angle in degrees:
/// either a ready number or a free-form text.
#[derive(Debug, Clone, PartialEq)]
pub enum AngleInput<'a> {
    /// The number of degrees
    Numeric(f64),
    /// Decimal degrees or degrees-minutes-seconds in one of the supported notations
    Text(Cow<'a, str>),
}

impl AngleInput<'_> {
    /// The finite number is used as is, no need to parse it
    pub(crate) fn as_finite(&self) -> Option<f64> {
        match self {
            Self::Numeric(value) if value.is_finite() => Some(*value),
            _ => None,
        }
    }

    /// Text representation of the input, the numbers are converted to string
    pub(crate) fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Numeric(value) => Cow::Owned(value.to_string()),
            Self::Text(s) => Cow::Borrowed(s),
        }
    }
}

enum_trivial_from_impl!(f64 => AngleInput<'_>:Numeric);

macro_rules! impl_from_number {
    ($($t:ty),+) => {
        $(
            impl From<$t> for AngleInput<'_> {
                fn from(value: $t) -> Self {
                    Self::Numeric(value.to_f64().unwrap_or(f64::NAN))
                }
            }
        )+
    };
}

impl_from_number!(f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<'a> From<&'a str> for AngleInput<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for AngleInput<'a> {
    fn from(s: &'a String) -> Self {
        Self::Text(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for AngleInput<'_> {
    fn from(s: String) -> Self {
        Self::Text(Cow::Owned(s))
    }
}

impl<'a> From<Cow<'a, str>> for AngleInput<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        Self::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_float() {
        assert_eq!(AngleInput::from(3.5), AngleInput::Numeric(3.5));
        assert_eq!(AngleInput::from(0.25_f32), AngleInput::Numeric(0.25));
    }

    #[test]
    fn from_integers() {
        assert_eq!(AngleInput::from(-450), AngleInput::Numeric(-450.0));
        assert_eq!(AngleInput::from(90_u8), AngleInput::Numeric(90.0));
        assert_eq!(AngleInput::from(360_usize), AngleInput::Numeric(360.0));
    }

    #[test]
    fn from_strings() {
        let owned = String::from("51° 28′ 40.12″ N");
        assert_eq!(
            AngleInput::from(&owned),
            AngleInput::Text(Cow::Borrowed("51° 28′ 40.12″ N"))
        );
        assert_eq!(AngleInput::from("FRED").to_text(), "FRED");
        assert_eq!(AngleInput::from(owned.clone()).to_text(), owned);
    }

    #[test]
    fn finite_numbers_only() {
        assert_eq!(AngleInput::from(-27.389).as_finite(), Some(-27.389));
        assert_eq!(AngleInput::from(f64::NAN).as_finite(), None);
        assert_eq!(AngleInput::from(f64::INFINITY).as_finite(), None);
        assert_eq!(AngleInput::from("27.389").as_finite(), None);
    }

    #[test]
    fn non_finite_as_text() {
        assert_eq!(AngleInput::from(f64::NAN).to_text(), "NaN");
        assert_eq!(AngleInput::from(f64::NEG_INFINITY).to_text(), "-inf");
    }
}
