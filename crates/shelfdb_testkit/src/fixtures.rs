//! Test fixtures and catalog helpers.
//!
//! Provides convenience constructors for setting up test catalogs without
//! touching the working directory.

use shelfdb_core::{Book, BookStore, Catalog};
use shelfdb_storage::MemoryBackend;
use std::path::PathBuf;
use tempfile::TempDir;

/// A test catalog with automatic cleanup.
pub struct TestCatalog {
    /// The catalog under test.
    pub catalog: Catalog,
    /// The temporary directory (kept alive to prevent cleanup).
    temp_dir: Option<TempDir>,
}

impl TestCatalog {
    /// Creates an in-memory test catalog.
    #[must_use]
    pub fn memory() -> Self {
        Self {
            catalog: Catalog::in_memory(),
            temp_dir: None,
        }
    }

    /// Creates a file-backed test catalog in a fresh temp directory.
    #[must_use]
    pub fn file() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("books.json");
        let catalog = Catalog::open(&path).expect("Failed to open catalog");

        Self {
            catalog,
            temp_dir: Some(temp_dir),
        }
    }

    /// Returns the backing file path if file-based, `None` if in-memory.
    #[must_use]
    pub fn path(&self) -> Option<PathBuf> {
        self.temp_dir.as_ref().map(|d| d.path().join("books.json"))
    }
}

impl std::ops::Deref for TestCatalog {
    type Target = Catalog;

    fn deref(&self) -> &Self::Target {
        &self.catalog
    }
}

/// Runs a test against an in-memory catalog.
pub fn with_temp_catalog<F, R>(f: F) -> R
where
    F: FnOnce(&Catalog) -> R,
{
    let test = TestCatalog::memory();
    f(&test.catalog)
}

/// Runs a test against a file-backed catalog in a temp directory.
pub fn with_file_catalog<F, R>(f: F) -> R
where
    F: FnOnce(&Catalog, &std::path::Path) -> R,
{
    let test = TestCatalog::file();
    let path = test.path().expect("File catalog should have a path");
    f(&test.catalog, &path)
}

/// Creates a catalog whose backend is pre-seeded with raw snapshot bytes.
///
/// Useful for observing how the layers above handle hand-written or
/// damaged snapshots.
#[must_use]
pub fn catalog_with_snapshot(bytes: &[u8]) -> Catalog {
    let backend = MemoryBackend::with_snapshot(bytes.to_vec());
    Catalog::new(BookStore::new(Box::new(backend)))
}

/// Adds a small fixed set of books and returns them in insertion order.
pub fn sample_books(catalog: &Catalog) -> Vec<Book> {
    vec![
        catalog.add("Dune", "Herbert", 1965).expect("add"),
        catalog.add("Solaris", "Lem", 1961).expect("add"),
        catalog.add("Neuromancer", "Gibson", 1984).expect("add"),
    ]
}
