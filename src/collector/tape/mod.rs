//! Collector for the `scsi_tape` sysfs class.
//!
//! Layout read by this module:
//!
//! ```text
//! /sys/class/scsi_tape/
//! ├── st0/stats/{in_flight,io_ns,other_cnt,read_byte_cnt,read_cnt,
//! │              read_ns,resid_cnt,write_byte_cnt,write_cnt,write_ns}
//! ├── nst0/          (alias, skipped)
//! └── st0a/ ...      (alias, skipped)
//! ```

mod collector;
pub mod parser;

pub use collector::{CollectError, TapeCollector};

/// Default sysfs mount point.
pub const DEFAULT_SYS_PATH: &str = "/sys";

/// Tape class directory relative to the sysfs mount point.
pub const TAPE_CLASS_DIR: &str = "class/scsi_tape";
