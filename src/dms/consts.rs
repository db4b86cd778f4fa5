pub(crate) const MINUTES_IN_DEGREE: f64 = 60.0;
pub(crate) const SECONDS_IN_MINUTE: f64 = 60.0;
pub(crate) const SECONDS_IN_DEGREE: f64 = MINUTES_IN_DEGREE * SECONDS_IN_MINUTE;

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '′';
pub(crate) const ARC_SECOND_SIGN: char = '″';

pub(crate) const FULL_TURN_DEG: f64 = 360.0;

// default number of decimal places for every style
pub(crate) const DEGREES_PLACES: u8 = 4;
pub(crate) const MINUTES_PLACES: u8 = 2;
pub(crate) const SECONDS_PLACES: u8 = 0;
