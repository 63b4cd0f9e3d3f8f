//! Counter source abstraction.
//!
//! The `FileSystem` trait lets the tape collector read sysfs attributes from
//! the real `/sys` tree on Linux or from an in-memory tree in tests.

use std::io;
use std::path::{Path, PathBuf};

/// Read-only access to the attribute tree the collector samples.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of an attribute file.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Lists the direct children of a directory as full paths.
    ///
    /// Order is whatever the backing store yields; callers that need a stable
    /// order sort the result themselves.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Filesystem implementation backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(path)?;
        let mut paths = Vec::new();
        for entry in entries {
            paths.push(entry?.path());
        }
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_real_fs_read_to_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("read_cnt");
        fs::write(&path, "42\n").unwrap();

        let content = RealFs::new().read_to_string(&path).unwrap();
        assert_eq!(content, "42\n");
    }

    #[test]
    fn test_real_fs_read_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("st0")).unwrap();
        fs::create_dir(dir.path().join("nst0")).unwrap();

        let mut entries = RealFs::new().read_dir(dir.path()).unwrap();
        entries.sort();
        assert_eq!(
            entries,
            vec![dir.path().join("nst0"), dir.path().join("st0")]
        );
    }

    #[test]
    fn test_real_fs_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = RealFs::new()
            .read_dir(&dir.path().join("scsi_tape"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
