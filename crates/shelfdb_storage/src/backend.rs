//! Snapshot backend trait definition.

use crate::error::StorageResult;
use std::fmt::Debug;

/// A whole-snapshot storage backend for shelfdb.
///
/// Backends are **opaque snapshot stores**: they hold at most one blob of
/// bytes and replace it in full on every write. shelfdb owns all format
/// interpretation - backends do not understand records or collections.
///
/// # Invariants
///
/// - `read` returns exactly the bytes of the last successful `write`, or
///   `None` if no snapshot has ever been written
/// - After `write` returns, the new snapshot is durable (to the extent the
///   backend supports durability)
/// - A `read` concurrent with or following an interrupted `write` observes
///   either the old snapshot or the new one in full, never an interleaving
///
/// # Implementors
///
/// - [`super::MemoryBackend`] - For testing
/// - [`super::FileBackend`] - For persistent storage
pub trait SnapshotBackend: Send + Sync + Debug {
    /// Reads the current snapshot.
    ///
    /// Returns `None` when no snapshot exists yet. A backend that has been
    /// written an empty blob returns `Some` of an empty vec, not `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O error occurs.
    fn read(&self) -> StorageResult<Option<Vec<u8>>>;

    /// Replaces the snapshot with `bytes`.
    ///
    /// Creates the snapshot if absent. After this returns successfully the
    /// previous snapshot is no longer observable.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O error occurs. On error the previous
    /// snapshot remains intact and readable.
    fn write(&self, bytes: &[u8]) -> StorageResult<()>;
}
