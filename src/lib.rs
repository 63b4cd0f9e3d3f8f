//! tapestat - I/O statistics for SCSI tape drives.
//!
//! Samples the counters the Linux `st` driver exports under
//! `/sys/class/scsi_tape/<dev>/stats/` and prints them either as cumulative
//! totals or as per-interval deltas.

pub mod collector;
pub mod fmt;
pub mod models;
pub mod rates;
pub mod sampler;
pub mod util;
