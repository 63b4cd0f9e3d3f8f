//! Utility modules for tapestat.

mod unit_parser;

pub use unit_parser::{Unit, UnitParseError, parse_unit};
