//! Angles rendered as the geographic coordinates or the compass bearing.

use std::fmt;

use log::debug;

use crate::{
    dms::{to_dms, DmsFormat, FULL_TURN_DEG},
    utils::round_to,
};

macro_rules! direction_enum {
    ($(#[$meta:meta])* $name:ident: $positive:ident = $pos_ch:literal and $negative:ident = $neg_ch:literal) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            #[allow(missing_docs)]
            $positive,
            #[allow(missing_docs)]
            $negative,
        }

        impl $name {
            /// The direction of the signed angle, the negative zero is not negative
            pub fn of(deg: f64) -> Self {
                if deg < 0.0 {
                    Self::$negative
                } else {
                    Self::$positive
                }
            }

            /// The single letter denoting the direction
            pub const fn letter(self) -> char {
                match self {
                    Self::$positive => $pos_ch,
                    Self::$negative => $neg_ch,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.letter())
            }
        }
    };
}

direction_enum!(
    /// The hemisphere of the latitude
    Pole: North = 'N' and South = 'S'
);

direction_enum!(
    /// The hemisphere of the longitude
    RotationalDirection: East = 'E' and West = 'W'
);

/// Convert decimal degrees into the latitude text suffixed with `N` or `S`.
///
/// ```
/// use geo_dms::{to_lat, DmsFormat};
///
/// assert_eq!(to_lat(-51.477_811_111_111_116, DmsFormat::default()), "51°28′40″S");
/// ```
pub fn to_lat(deg: f64, format: DmsFormat) -> String {
    format!("{}{}", to_dms(deg, format), Pole::of(deg))
}

/// Convert decimal degrees into the longitude text suffixed with `E` or `W`.
pub fn to_lon(deg: f64, format: DmsFormat) -> String {
    format!("{}{}", to_dms(deg, format), RotationalDirection::of(deg))
}

/// Convert decimal degrees into the bearing text in the range `0°..360°`.
///
/// The negative angles and the angles of more than a full turn are wrapped.
/// If the angle is so close to the full turn that it would be rendered as 360°
/// in the requested precision, the zero bearing is rendered instead.
///
/// ```
/// use geo_dms::{to_brng, DmsFormat};
///
/// assert_eq!(to_brng(-450.0, DmsFormat::default()), "270°0′0″");
/// assert_eq!(to_brng(359.999_999, DmsFormat::default()), "0°0′0″");
/// ```
pub fn to_brng(deg: f64, format: DmsFormat) -> String {
    to_dms(normalize_bearing(deg, format), format)
}

/// Wrap the angle into the `[0, 360)` range,
/// taking into account the rounding made by the given format.
fn normalize_bearing(deg: f64, format: DmsFormat) -> f64 {
    let deg = deg.rem_euclid(FULL_TURN_DEG);

    let style = format.style;
    let places = format.decimal_places();
    let shown = round_to(style.in_smallest_units(deg), places);
    if shown >= style.in_smallest_units(FULL_TURN_DEG) {
        debug!("Bearing {deg} rendered as {style} with {places} decimal places wraps to zero");
        return 0.0;
    }

    deg
}
