//! File-based snapshot backend for persistent storage.

use crate::backend::SnapshotBackend;
use crate::error::StorageResult;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Suffix appended to the snapshot path for the temporary write file.
const TEMP_SUFFIX: &str = ".tmp";

/// A file-based snapshot backend.
///
/// The snapshot lives in a single file. Data survives process restarts.
///
/// # Durability
///
/// `write` uses a write-then-rename sequence for crash safety:
///
/// 1. Write the new snapshot to a temporary file next to the target
/// 2. Sync the temporary file to disk
/// 3. Rename the temporary file over the target
/// 4. Fsync the containing directory so the rename itself is durable
///
/// A crash at any point leaves either the previous snapshot or the new one
/// at the target path, never a partial write.
///
/// # Example
///
/// ```no_run
/// use shelfdb_storage::{FileBackend, SnapshotBackend};
/// use std::path::Path;
///
/// let backend = FileBackend::open(Path::new("books.json"));
/// backend.write(b"[]").unwrap();
/// let bytes = backend.read().unwrap();
/// assert_eq!(bytes.as_deref(), Some(&b"[]"[..]));
/// ```
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Creates a backend for the snapshot file at `path`.
    ///
    /// The file itself is not touched until the first `write`; a missing
    /// file reads as `None`.
    #[must_use]
    pub fn open(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Creates a backend at `path`, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directories cannot be created.
    pub fn open_with_create_dirs(path: &Path) -> StorageResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self::open(path))
    }

    /// Returns the path to the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(TEMP_SUFFIX);
        PathBuf::from(name)
    }

    /// Syncs the containing directory so a completed rename is durable.
    #[cfg(unix)]
    fn sync_directory(&self) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                let dir = File::open(parent)?;
                dir.sync_all()?;
            }
        }
        Ok(())
    }

    #[cfg(not(unix))]
    fn sync_directory(&self) -> StorageResult<()> {
        // Windows NTFS journaling covers metadata durability; directory
        // fsync is not supported there.
        Ok(())
    }
}

impl SnapshotBackend for FileBackend {
    fn read(&self) -> StorageResult<Option<Vec<u8>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let mut file = File::open(&self.path)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        Ok(Some(bytes))
    }

    fn write(&self, bytes: &[u8]) -> StorageResult<()> {
        let temp_path = self.temp_path();

        let mut file = File::create(&temp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        drop(file);

        fs::rename(&temp_path, &self.path)?;
        self.sync_directory()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let backend = FileBackend::open(&path);
        assert!(backend.read().unwrap().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snap.json");

        let backend = FileBackend::open(&path);
        backend.write(b"hello world").unwrap();

        let bytes = backend.read().unwrap().unwrap();
        assert_eq!(&bytes, b"hello world");
    }

    #[test]
    fn write_replaces_previous_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snap.json");

        let backend = FileBackend::open(&path);
        backend.write(b"first snapshot").unwrap();
        backend.write(b"second").unwrap();

        let bytes = backend.read().unwrap().unwrap();
        assert_eq!(&bytes, b"second");
    }

    #[test]
    fn empty_snapshot_is_some() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snap.json");

        let backend = FileBackend::open(&path);
        backend.write(b"").unwrap();

        assert_eq!(backend.read().unwrap(), Some(Vec::new()));
    }

    #[test]
    fn persistence_across_backends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snap.json");

        {
            let backend = FileBackend::open(&path);
            backend.write(b"persistent data").unwrap();
        }

        let backend = FileBackend::open(&path);
        let bytes = backend.read().unwrap().unwrap();
        assert_eq!(&bytes, b"persistent data");
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snap.json");

        let backend = FileBackend::open(&path);
        backend.write(b"data").unwrap();

        assert!(path.exists());
        assert!(!backend.temp_path().exists());
    }

    #[test]
    fn create_with_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("snap.json");

        let backend = FileBackend::open_with_create_dirs(&path).unwrap();
        backend.write(b"x").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn path_accessor() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snap.json");

        let backend = FileBackend::open(&path);
        assert_eq!(backend.path(), path);
    }
}
