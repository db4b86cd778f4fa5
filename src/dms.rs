//! Conversion between the decimal degrees and their
//! degrees/minutes/seconds text representation.
//! <https://en.wikipedia.org/wiki/Degree_(angle)#Subdivisions>

mod consts;
mod errors;
mod format;
mod input;
mod parse;

pub(crate) use consts::FULL_TURN_DEG;
pub use errors::ParseDmsError;
pub use format::{to_dms, DmsFormat, DmsStyle};
pub use input::AngleInput;
pub use parse::parse_dms;
