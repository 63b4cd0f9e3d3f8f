//! Parsers for `scsi_tape` sysfs entries.

/// Parse error for a sysfs attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Returns true for tape device names: `st` followed only by decimal digits.
///
/// The `st` driver also registers `nstN` (no rewind) and `stNa`/`stNl`/`stNm`
/// (alternate modes) entries; those share the counters of `stN` and are skipped.
pub fn is_tape_device(name: &str) -> bool {
    name.strip_prefix("st")
        .is_some_and(|rest| rest.bytes().all(|b| b.is_ascii_digit()))
}

/// Parses one counter attribute.
///
/// sysfs terminates attribute values with a newline; surrounding whitespace is
/// ignored, anything else must be a base-10 `i64`.
pub fn parse_counter(content: &str) -> Result<i64, ParseError> {
    let value = content.trim();
    if value.is_empty() {
        return Err(ParseError::new("empty counter value"));
    }
    value
        .parse::<i64>()
        .map_err(|e| ParseError::new(format!("invalid counter value {:?}: {}", value, e)))
}
