//! Display unit for byte counters.
//!
//! Only the first character of the input matters, case-insensitively:
//! `B` bytes, `K` KiB, `M` MiB, `G` GiB, `T` TiB. Empty input means bytes.

use std::str::FromStr;

/// Unit byte counters are divided by before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    #[default]
    Bytes,
    Kilo,
    Mega,
    Giga,
    Tera,
}

impl Unit {
    /// Column label (`"B"`, `"KB"`, ...).
    pub fn label(self) -> &'static str {
        match self {
            Unit::Bytes => "B",
            Unit::Kilo => "KB",
            Unit::Mega => "MB",
            Unit::Giga => "GB",
            Unit::Tera => "TB",
        }
    }

    pub fn divisor(self) -> f64 {
        match self {
            Unit::Bytes => 1.0,
            Unit::Kilo => 1024.0,
            Unit::Mega => 1_048_576.0,
            Unit::Giga => 1_073_741_824.0,
            Unit::Tera => 1_099_511_627_776.0,
        }
    }

    /// Converts a byte count into this unit.
    pub fn convert(self, bytes: i64) -> f64 {
        bytes as f64 / self.divisor()
    }
}

/// Error type for unit parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitParseError {
    pub input: String,
    pub message: String,
}

impl std::fmt::Display for UnitParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid unit '{}': {}", self.input, self.message)
    }
}

impl std::error::Error for UnitParseError {}

/// Parses a unit specifier such as `"k"`, `"MB"` or `""`.
///
/// # Examples
///
/// ```
/// use tapestat::util::{Unit, parse_unit};
///
/// assert_eq!(parse_unit("").unwrap(), Unit::Bytes);
/// assert_eq!(parse_unit("m").unwrap().divisor(), 1_048_576.0);
/// assert!(parse_unit("x").is_err());
/// ```
pub fn parse_unit(input: &str) -> Result<Unit, UnitParseError> {
    let Some(first) = input.chars().next() else {
        return Ok(Unit::Bytes);
    };

    let error = |message: &str| UnitParseError {
        input: input.to_string(),
        message: message.to_string(),
    };

    match first {
        'B' | 'b' => Ok(Unit::Bytes),
        'K' | 'k' => Ok(Unit::Kilo),
        'M' | 'm' => Ok(Unit::Mega),
        'G' | 'g' => Ok(Unit::Giga),
        'T' | 't' => Ok(Unit::Tera),
        char::REPLACEMENT_CHARACTER => Err(error("unable to decode first character")),
        _ => Err(error("expected one of B, K, M, G, T")),
    }
}

impl FromStr for Unit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_unit(s)
    }
}
