//! Pre-built mock `/sys` scenarios for testing.

use super::filesystem::MockFs;
use crate::collector::tape::{DEFAULT_SYS_PATH, TAPE_CLASS_DIR};
use crate::models::TapeCounters;
use std::path::Path;

impl MockFs {
    /// A tape class directory that exists but holds no drives.
    pub fn no_tape_drives() -> Self {
        let mut fs = Self::new();
        fs.add_dir(Path::new(DEFAULT_SYS_PATH).join(TAPE_CLASS_DIR));
        fs
    }

    /// Two idle drives plus the non-rewinding and mode aliases the `st`
    /// driver registers next to each of them.
    pub fn tape_library() -> Self {
        let mut fs = Self::no_tape_drives();

        fs.add_tape_device(
            "st0",
            &TapeCounters {
                in_flight: 0,
                io_ns: 1_250_000_000,
                other_cnt: 12,
                read_byte_cnt: 4096,
                read_cnt: 10,
                read_ns: 400_000_000,
                resid_cnt: 0,
                write_byte_cnt: 8192,
                write_cnt: 20,
                write_ns: 800_000_000,
            },
        );
        fs.add_tape_device(
            "st1",
            &TapeCounters {
                io_ns: 50_000_000,
                other_cnt: 3,
                ..TapeCounters::default()
            },
        );

        for alias in ["nst0", "nst1", "st0a", "st0l", "st0m", "nst0a", "st1a"] {
            fs.add_dir(MockFs::device_dir(alias));
        }

        fs
    }

    /// A single drive whose stats directory is missing one attribute, as seen
    /// on kernels that predate the full counter set.
    pub fn incomplete_stats() -> Self {
        let mut fs = Self::no_tape_drives();
        fs.add_tape_device("st0", &TapeCounters::default());
        fs.remove_file(MockFs::device_dir("st0").join("stats").join("resid_cnt"));
        fs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::traits::FileSystem;

    #[test]
    fn test_tape_library_layout() {
        let fs = MockFs::tape_library();
        let class = fs
            .read_dir(&Path::new(DEFAULT_SYS_PATH).join(TAPE_CLASS_DIR))
            .unwrap();
        assert_eq!(class.len(), 9);
    }

    #[test]
    fn test_no_tape_drives_is_empty() {
        let fs = MockFs::no_tape_drives();
        let class = fs
            .read_dir(&Path::new(DEFAULT_SYS_PATH).join(TAPE_CLASS_DIR))
            .unwrap();
        assert!(class.is_empty());
    }
}
