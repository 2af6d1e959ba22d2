//! Hex color parse errors

use std::fmt;
use std::num::ParseIntError;

/// Why a string is not a valid `#rgb`, `#rrggbb` or `#rrggbbaa` color.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Not 3, 6 or 8 ASCII hex digits after the optional `#`
    InvalidLength,
    /// A digit group is not hexadecimal
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => f.write_str("expected #rgb, #rrggbb or #rrggbbaa"),
            ParseColorError::InvalidHex(err) => write!(f, "bad hex digits: {}", err),
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            ParseColorError::InvalidLength => None,
        }
    }
}
