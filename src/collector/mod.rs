//! Tape statistics collector for Linux.
//!
//! Reads the per-drive counters the `st` driver publishes in sysfs, with an
//! in-memory filesystem for tests.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │            TapeCollector             │
//! │  - discover(): class/scsi_tape/st*   │
//! │  - read_counters(): <dev>/stats/*    │
//! └──────────────────┬───────────────────┘
//!                    │
//!             ┌──────▼──────┐
//!             │  FileSystem │ (trait)
//!             └──────┬──────┘
//!          ┌─────────┴─────────┐
//!   ┌──────▼──────┐     ┌──────▼──────┐
//!   │   RealFs    │     │   MockFs    │
//!   │   (Linux)   │     │  (Testing)  │
//!   └─────────────┘     └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use tapestat::collector::{MockFs, TapeCollector};
//!
//! let collector = TapeCollector::new(MockFs::tape_library(), "/sys");
//! let devices = collector.discover().unwrap();
//! assert_eq!(devices, vec!["st0", "st1"]);
//!
//! let snapshot = collector.read_counters(&devices[0]).unwrap();
//! assert_eq!(snapshot.counters.read_cnt, 10);
//! ```

pub mod mock;
pub mod tape;
pub mod traits;

pub use mock::MockFs;
pub use tape::{CollectError, DEFAULT_SYS_PATH, TapeCollector};
pub use traits::{FileSystem, RealFs};
