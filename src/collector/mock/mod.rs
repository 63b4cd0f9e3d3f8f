//! Mock filesystem implementations for testing.
//!
//! This module provides `MockFs` and pre-built scenarios for testing the tape
//! collector without a real `/sys/class/scsi_tape`.

mod filesystem;
mod scenarios;

pub use filesystem::MockFs;
