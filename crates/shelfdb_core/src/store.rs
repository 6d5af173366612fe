//! Whole-collection persistence over a snapshot backend.

use crate::book::Book;
use crate::error::{CatalogError, CatalogResult};
use shelfdb_storage::{FileBackend, MemoryBackend, SnapshotBackend};
use std::path::Path;

/// Loads and saves the full book collection.
///
/// The store owns the durable copy of the collection. It has no cache: every
/// `load` reads the backend, every `save` rewrites the complete snapshot.
/// Atomicity of the rewrite is the backend's contract
/// ([`SnapshotBackend::write`]).
///
/// The backend is threaded in at construction, so tests can point a store at
/// a temp file or an in-memory backend without touching the working
/// directory.
///
/// # Example
///
/// ```rust
/// use shelfdb_core::{Book, BookId, BookStatus, BookStore};
///
/// let store = BookStore::in_memory();
/// assert!(store.load().unwrap().is_empty());
///
/// let books = vec![Book {
///     id: BookId::new(1),
///     title: "Dune".to_string(),
///     author: "Herbert".to_string(),
///     year: 1965,
///     status: BookStatus::Available,
/// }];
/// store.save(&books).unwrap();
/// assert_eq!(store.load().unwrap(), books);
/// ```
#[derive(Debug)]
pub struct BookStore {
    backend: Box<dyn SnapshotBackend>,
}

impl BookStore {
    /// Creates a store over the given backend.
    #[must_use]
    pub fn new(backend: Box<dyn SnapshotBackend>) -> Self {
        Self { backend }
    }

    /// Creates a file-backed store at `path`, creating parent directories
    /// if needed.
    ///
    /// The file itself is only created on the first `save`.
    ///
    /// # Errors
    ///
    /// Returns an error if parent directories cannot be created.
    pub fn open(path: &Path) -> CatalogResult<Self> {
        let backend = FileBackend::open_with_create_dirs(path)?;
        Ok(Self::new(Box::new(backend)))
    }

    /// Creates an in-memory store, for tests and ephemeral catalogs.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryBackend::new()))
    }

    /// Loads the full collection.
    ///
    /// A missing snapshot (or an empty one) is an empty collection, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CorruptStore`] when the snapshot exists but
    /// does not decode as a collection. The snapshot bytes are left
    /// untouched so the caller can decide how to recover.
    pub fn load(&self) -> CatalogResult<Vec<Book>> {
        let bytes = match self.backend.read()? {
            None => return Ok(Vec::new()),
            Some(bytes) => bytes,
        };

        if bytes.is_empty() {
            return Ok(Vec::new());
        }

        let books: Vec<Book> =
            serde_json::from_slice(&bytes).map_err(CatalogError::corrupt_store)?;
        tracing::debug!(count = books.len(), "loaded catalog snapshot");
        Ok(books)
    }

    /// Saves the full collection, replacing the previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the backend write fails. On a write
    /// failure the previous snapshot remains intact.
    pub fn save(&self, books: &[Book]) -> CatalogResult<()> {
        let bytes = serde_json::to_vec(books).map_err(CatalogError::Encode)?;
        self.backend.write(&bytes)?;
        tracing::debug!(count = books.len(), "saved catalog snapshot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::{BookId, BookStatus};
    use shelfdb_storage::MemoryBackend;
    use tempfile::tempdir;

    fn sample() -> Vec<Book> {
        vec![
            Book {
                id: BookId::new(1),
                title: "Dune".to_string(),
                author: "Herbert".to_string(),
                year: 1965,
                status: BookStatus::Available,
            },
            Book {
                id: BookId::new(2),
                title: "Solaris".to_string(),
                author: "Lem".to_string(),
                year: 1961,
                status: BookStatus::CheckedOut,
            },
        ]
    }

    #[test]
    fn missing_snapshot_loads_empty() {
        let store = BookStore::in_memory();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn empty_snapshot_loads_empty() {
        let store = BookStore::new(Box::new(MemoryBackend::with_snapshot(Vec::new())));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_load_round_trip() {
        let store = BookStore::in_memory();
        let books = sample();

        store.save(&books).unwrap();
        assert_eq!(store.load().unwrap(), books);
    }

    #[test]
    fn save_is_idempotent_through_load() {
        // save(load()) is a fixed point
        let store = BookStore::in_memory();
        store.save(&sample()).unwrap();

        let loaded = store.load().unwrap();
        store.save(&loaded).unwrap();
        assert_eq!(store.load().unwrap(), loaded);
    }

    #[test]
    fn corrupt_snapshot_is_an_error() {
        let store =
            BookStore::new(Box::new(MemoryBackend::with_snapshot(b"not json".to_vec())));
        let err = store.load().unwrap_err();
        assert!(matches!(err, CatalogError::CorruptStore { .. }));
    }

    #[test]
    fn corrupt_snapshot_left_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.json");
        std::fs::write(&path, b"{broken").unwrap();

        let store = BookStore::open(&path).unwrap();
        assert!(store.load().is_err());

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes, b"{broken");
    }

    #[test]
    fn wrong_shape_is_corrupt() {
        // Valid JSON, but not an array of records.
        let store = BookStore::new(Box::new(MemoryBackend::with_snapshot(
            b"{\"id\": 1}".to_vec(),
        )));
        assert!(matches!(
            store.load().unwrap_err(),
            CatalogError::CorruptStore { .. }
        ));
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.json");

        {
            let store = BookStore::open(&path).unwrap();
            store.save(&sample()).unwrap();
        }

        let store = BookStore::open(&path).unwrap();
        assert_eq!(store.load().unwrap(), sample());
    }

    #[test]
    fn open_does_not_create_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.json");

        let store = BookStore::open(&path).unwrap();
        assert!(store.load().unwrap().is_empty());
        assert!(!path.exists());
    }
}
