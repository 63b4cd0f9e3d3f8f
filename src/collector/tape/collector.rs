//! Tape collector: device discovery and per-device counter snapshots.

use crate::collector::tape::parser::{is_tape_device, parse_counter};
use crate::collector::tape::TAPE_CLASS_DIR;
use crate::collector::traits::FileSystem;
use crate::models::{TapeCounter, TapeCounters, TapeSnapshot};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Error type for collection failures.
#[derive(Debug)]
pub enum CollectError {
    /// The tape class directory could not be listed.
    Discovery { path: PathBuf, source: io::Error },
    /// A counter attribute could not be read.
    Read { path: PathBuf, source: io::Error },
    /// A counter attribute did not hold an integer.
    Parse { path: PathBuf, message: String },
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::Discovery { path, source } => {
                write!(f, "cannot list tape devices in {}: {}", path.display(), source)
            }
            CollectError::Read { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            CollectError::Parse { path, message } => {
                write!(f, "cannot parse {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for CollectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollectError::Discovery { source, .. } | CollectError::Read { source, .. } => {
                Some(source)
            }
            CollectError::Parse { .. } => None,
        }
    }
}

/// Reads tape statistics from `<sys>/class/scsi_tape`.
pub struct TapeCollector<F: FileSystem> {
    fs: F,
    class_path: PathBuf,
}

impl<F: FileSystem> TapeCollector<F> {
    /// Creates a new tape collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `sys_path` - Base path to the sysfs mount (usually "/sys")
    pub fn new(fs: F, sys_path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            class_path: sys_path.as_ref().join(TAPE_CLASS_DIR),
        }
    }

    /// Directory that holds one entry per tape device.
    pub fn class_path(&self) -> &Path {
        &self.class_path
    }

    /// Lists tape devices, sorted by name.
    pub fn discover(&self) -> Result<Vec<String>, CollectError> {
        let entries =
            self.fs
                .read_dir(&self.class_path)
                .map_err(|source| CollectError::Discovery {
                    path: self.class_path.clone(),
                    source,
                })?;

        let mut devices: Vec<String> = entries
            .iter()
            .filter_map(|path| path.file_name()?.to_str())
            .filter(|name| is_tape_device(name))
            .map(str::to_string)
            .collect();
        devices.sort();

        debug!(
            "Found {} tape device(s) in {}: {:?}",
            devices.len(),
            self.class_path.display(),
            devices
        );
        Ok(devices)
    }

    /// Reads all counters of one device.
    ///
    /// Either every counter is read or an error is returned.
    pub fn read_counters(&self, device: &str) -> Result<TapeSnapshot, CollectError> {
        let stats_dir = self.class_path.join(device).join("stats");
        let read = |counter: TapeCounter| self.read_counter(&stats_dir, counter);

        let counters = TapeCounters {
            in_flight: read(TapeCounter::InFlight)?,
            io_ns: read(TapeCounter::IoNs)?,
            other_cnt: read(TapeCounter::OtherCnt)?,
            read_byte_cnt: read(TapeCounter::ReadByteCnt)?,
            read_cnt: read(TapeCounter::ReadCnt)?,
            read_ns: read(TapeCounter::ReadNs)?,
            resid_cnt: read(TapeCounter::ResidCnt)?,
            write_byte_cnt: read(TapeCounter::WriteByteCnt)?,
            write_cnt: read(TapeCounter::WriteCnt)?,
            write_ns: read(TapeCounter::WriteNs)?,
        };
        trace!("{}: {:?}", device, counters);

        Ok(TapeSnapshot {
            device: device.to_string(),
            timestamp_ms: chrono::Utc::now().timestamp_millis(),
            counters,
        })
    }

    /// Reads every device in `devices`, in order.
    pub fn read_all(&self, devices: &[String]) -> Result<Vec<TapeSnapshot>, CollectError> {
        devices.iter().map(|dev| self.read_counters(dev)).collect()
    }

    fn read_counter(&self, stats_dir: &Path, counter: TapeCounter) -> Result<i64, CollectError> {
        let path = stats_dir.join(counter.file_name());
        let content = self
            .fs
            .read_to_string(&path)
            .map_err(|source| CollectError::Read {
                path: path.clone(),
                source,
            })?;
        parse_counter(&content).map_err(|e| CollectError::Parse {
            path,
            message: e.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockFs;

    #[test]
    fn test_discover_filters_aliases() {
        let collector = TapeCollector::new(MockFs::tape_library(), "/sys");
        assert_eq!(collector.discover().unwrap(), vec!["st0", "st1"]);
    }

    #[test]
    fn test_discover_sorted() {
        let mut fs = MockFs::no_tape_drives();
        for dev in ["st10", "st2", "st", "st0"] {
            fs.add_tape_device(dev, &TapeCounters::default());
        }
        let collector = TapeCollector::new(fs, "/sys");
        assert_eq!(collector.discover().unwrap(), vec!["st", "st0", "st10", "st2"]);
    }

    #[test]
    fn test_discover_empty() {
        let collector = TapeCollector::new(MockFs::no_tape_drives(), "/sys");
        assert!(collector.discover().unwrap().is_empty());
    }

    #[test]
    fn test_discover_missing_class_dir() {
        let collector = TapeCollector::new(MockFs::new(), "/sys");
        let err = collector.discover().unwrap_err();
        assert!(matches!(err, CollectError::Discovery { .. }));
        assert!(err.to_string().contains("/sys/class/scsi_tape"));
    }

    #[test]
    fn test_discover_custom_sys_path() {
        let mut fs = MockFs::new();
        fs.add_dir("/tmp/capture/class/scsi_tape/st3");
        let collector = TapeCollector::new(fs, "/tmp/capture");
        assert_eq!(collector.discover().unwrap(), vec!["st3"]);
    }

    #[test]
    fn test_read_counters() {
        let collector = TapeCollector::new(MockFs::tape_library(), "/sys");
        let snapshot = collector.read_counters("st0").unwrap();

        assert_eq!(snapshot.device, "st0");
        assert!(snapshot.timestamp_ms > 0);
        assert_eq!(snapshot.counters.read_byte_cnt, 4096);
        assert_eq!(snapshot.counters.read_cnt, 10);
        assert_eq!(snapshot.counters.write_byte_cnt, 8192);
        assert_eq!(snapshot.counters.write_cnt, 20);
        assert_eq!(snapshot.counters.other_cnt, 12);
        assert_eq!(snapshot.counters.io_ns, 1_250_000_000);
    }

    #[test]
    fn test_read_counters_missing_file() {
        let collector = TapeCollector::new(MockFs::incomplete_stats(), "/sys");
        let err = collector.read_counters("st0").unwrap_err();
        match err {
            CollectError::Read { path, .. } => assert!(path.ends_with("stats/resid_cnt")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_counters_garbage() {
        let mut fs = MockFs::tape_library();
        fs.add_file(
            MockFs::device_dir("st1").join("stats").join("write_cnt"),
            "n/a\n",
        );
        let collector = TapeCollector::new(fs, "/sys");
        let err = collector.read_counters("st1").unwrap_err();
        assert!(matches!(err, CollectError::Parse { .. }));
        assert!(err.to_string().contains("write_cnt"));
    }

    #[test]
    fn test_read_all_fails_on_any_device() {
        let mut fs = MockFs::tape_library();
        fs.remove_file(MockFs::device_dir("st1").join("stats").join("io_ns"));
        let collector = TapeCollector::new(fs, "/sys");
        let devices = collector.discover().unwrap();
        assert!(collector.read_all(&devices).is_err());
    }

    #[test]
    fn test_real_fs_tree() {
        let root = tempfile::tempdir().unwrap();
        let stats = root.path().join("class/scsi_tape/st0/stats");
        std::fs::create_dir_all(&stats).unwrap();
        std::fs::create_dir_all(root.path().join("class/scsi_tape/nst0")).unwrap();
        for (i, counter) in TapeCounter::ALL.iter().enumerate() {
            std::fs::write(stats.join(counter.file_name()), format!("{}\n", i)).unwrap();
        }

        let collector = TapeCollector::new(crate::collector::RealFs::new(), root.path());
        assert_eq!(collector.discover().unwrap(), vec!["st0"]);

        let counters = collector.read_counters("st0").unwrap().counters;
        for (i, counter) in TapeCounter::ALL.iter().enumerate() {
            assert_eq!(counters.get(*counter), i as i64);
        }
    }
}
