//! In-memory snapshot backend for testing.

use crate::backend::SnapshotBackend;
use crate::error::StorageResult;
use parking_lot::RwLock;

/// An in-memory snapshot backend.
///
/// Holds the snapshot in a `Vec<u8>`. Useful for tests and ephemeral
/// catalogs; contents are lost when the backend is dropped.
///
/// # Example
///
/// ```rust
/// use shelfdb_storage::{MemoryBackend, SnapshotBackend};
///
/// let backend = MemoryBackend::new();
/// backend.write(b"snapshot").unwrap();
/// assert_eq!(backend.read().unwrap().as_deref(), Some(&b"snapshot"[..]));
/// ```
#[derive(Debug, Default)]
pub struct MemoryBackend {
    snapshot: RwLock<Option<Vec<u8>>>,
}

impl MemoryBackend {
    /// Creates an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-seeded with a snapshot.
    ///
    /// Useful for tests that need to observe how malformed snapshots are
    /// handled by the layers above.
    #[must_use]
    pub fn with_snapshot(bytes: Vec<u8>) -> Self {
        Self {
            snapshot: RwLock::new(Some(bytes)),
        }
    }
}

impl SnapshotBackend for MemoryBackend {
    fn read(&self) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.snapshot.read().clone())
    }

    fn write(&self, bytes: &[u8]) -> StorageResult<()> {
        *self.snapshot.write() = Some(bytes.to_vec());
        Ok(())
    }
}
