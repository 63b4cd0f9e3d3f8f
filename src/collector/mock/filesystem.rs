//! In-memory mock filesystem for testing the collector without a real `/sys`.

use crate::collector::tape::{DEFAULT_SYS_PATH, TAPE_CLASS_DIR};
use crate::collector::traits::FileSystem;
use crate::models::{TapeCounter, TapeCounters};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory filesystem for testing.
///
/// Stores attribute files and directories in memory so tests can describe any
/// tape class layout, including broken ones.
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MockFs {
    /// Creates a new empty mock filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with the given content. Parent directories are created.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.files.insert(path, content.into());
    }

    /// Adds an empty directory. Parent directories are created.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref().to_path_buf();
        self.add_parents(&path);
        self.directories.insert(path);
    }

    /// Removes a file, leaving its directory in place.
    pub fn remove_file(&mut self, path: impl AsRef<Path>) {
        self.files.remove(path.as_ref());
    }

    fn add_parents(&mut self, path: &Path) {
        let mut parent = path.parent();
        while let Some(p) = parent {
            if !p.as_os_str().is_empty() {
                self.directories.insert(p.to_path_buf());
            }
            parent = p.parent();
        }
    }

    /// Path of a device directory under the default `/sys` root.
    pub fn device_dir(device: &str) -> PathBuf {
        Path::new(DEFAULT_SYS_PATH).join(TAPE_CLASS_DIR).join(device)
    }

    /// Adds a tape device with all ten `stats/` attribute files.
    ///
    /// Values are written the way sysfs does: decimal followed by a newline.
    pub fn add_tape_device(&mut self, device: &str, counters: &TapeCounters) {
        let dir = Self::device_dir(device);
        self.add_dir(&dir);
        for counter in TapeCounter::ALL {
            self.set_counter(device, counter, counters.get(counter));
        }
    }

    /// Overwrites a single counter of an existing (or new) device.
    pub fn set_counter(&mut self, device: &str, counter: TapeCounter, value: i64) {
        let path = Self::device_dir(device)
            .join("stats")
            .join(counter.file_name());
        self.add_file(path, format!("{}\n", value));
    }

    /// Replaces every counter of a device.
    pub fn set_counters(&mut self, device: &str, counters: &TapeCounters) {
        for counter in TapeCounter::ALL {
            self.set_counter(device, counter, counters.get(counter));
        }
    }
}

impl FileSystem for MockFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {:?}", path),
            )
        })
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        if !self.directories.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("directory not found: {:?}", path),
            ));
        }

        let mut entries = HashSet::new();

        for file_path in self.files.keys() {
            if file_path.parent().is_some_and(|parent| parent == path) {
                entries.insert(file_path.clone());
            }
        }

        for dir_path in &self.directories {
            if dir_path.parent().is_some_and(|parent| parent == path) && dir_path != path {
                entries.insert(dir_path.clone());
            }
        }

        Ok(entries.into_iter().collect())
    }
}
