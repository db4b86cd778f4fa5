use std::{error::Error, fmt};

/// The text cannot be read as an angle.
///
/// Only the number of numeric parts found in the text is checked:
/// any value of the parts themselves is accepted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseDmsError {
    /// Not a single digit was found
    NoNumericContent,
    /// More than the degrees, minutes and seconds were found
    TooManyParts(usize),
}

impl fmt::Display for ParseDmsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse DMS: ")?;
        match self {
            Self::NoNumericContent => write!(f, "no numeric value found"),
            Self::TooManyParts(n) => write!(f, "expected up to 3 numeric parts, but found {n}"),
        }
    }
}

impl Error for ParseDmsError {}
