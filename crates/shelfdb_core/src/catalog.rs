//! Catalog operations: add, remove, search, list, set-status.

use crate::book::{next_id, Book, BookId, BookStatus};
use crate::error::{CatalogError, CatalogResult};
use crate::store::BookStore;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Field a search query is matched against.
///
/// A closed set: dispatch over these variants replaces the source-style
/// lookup by raw field name, which faulted on anything unexpected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Match against the title.
    Title,
    /// Match against the author.
    Author,
    /// Match against the publication year.
    Year,
}

impl SearchField {
    /// Returns the field name as used on the front-end boundary.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "year" => Ok(Self::Year),
            _ => Err(CatalogError::unsupported_field(s)),
        }
    }
}

/// Outcome of a remove operation.
///
/// An unknown id is a reported outcome, not an error; no write happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The record was removed and the collection persisted.
    Removed(Book),
    /// No record has the given id.
    NotFound,
}

/// Outcome of a set-status operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusOutcome {
    /// The record's status was replaced and the collection persisted.
    Updated(Book),
    /// No record has the given id.
    NotFound,
}

/// The catalog: user-facing operations over a [`BookStore`].
///
/// Each operation performs one full load-transform-save cycle (pure reads
/// skip the save). The catalog holds no state between operations; the store
/// owns the durable copy.
///
/// # Example
///
/// ```rust
/// use shelfdb_core::{BookStatus, Catalog, SearchField};
///
/// let catalog = Catalog::in_memory();
/// let book = catalog.add("Dune", "Herbert", 1965).unwrap();
/// assert_eq!(book.id.as_u64(), 1);
/// assert_eq!(book.status, BookStatus::Available);
///
/// let hits = catalog.search("dune", SearchField::Title).unwrap();
/// assert_eq!(hits.len(), 1);
/// ```
#[derive(Debug)]
pub struct Catalog {
    store: BookStore,
}

impl Catalog {
    /// Creates a catalog over an existing store.
    #[must_use]
    pub fn new(store: BookStore) -> Self {
        Self { store }
    }

    /// Creates a catalog backed by the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if parent directories cannot be created.
    pub fn open(path: &Path) -> CatalogResult<Self> {
        Ok(Self::new(BookStore::open(path)?))
    }

    /// Creates an in-memory catalog, for tests and ephemeral use.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(BookStore::in_memory())
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &BookStore {
        &self.store
    }

    /// Adds a new book and persists the collection.
    ///
    /// The id is allocated as `max + 1` over the current collection and the
    /// status starts as [`BookStatus::Available`]. Duplicate titles and
    /// authors are permitted; only the id is unique.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyTitle`] for a blank title, plus any
    /// store error.
    pub fn add(&self, title: &str, author: &str, year: i32) -> CatalogResult<Book> {
        if title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle);
        }

        let mut books = self.store.load()?;
        let book = Book {
            id: next_id(&books),
            title: title.to_string(),
            author: author.to_string(),
            year,
            status: BookStatus::Available,
        };
        books.push(book.clone());
        self.store.save(&books)?;

        tracing::debug!(id = %book.id, title, "added book");
        Ok(book)
    }

    /// Removes the book with the given id and persists the collection.
    ///
    /// The remaining records keep their order. An unknown id reports
    /// [`RemoveOutcome::NotFound`] and performs no write.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn remove(&self, id: BookId) -> CatalogResult<RemoveOutcome> {
        let mut books = self.store.load()?;

        let Some(index) = books.iter().position(|book| book.id == id) else {
            return Ok(RemoveOutcome::NotFound);
        };

        let removed = books.remove(index);
        self.store.save(&books)?;

        tracing::debug!(id = %id, "removed book");
        Ok(RemoveOutcome::Removed(removed))
    }

    /// Searches for books whose `field` equals `query`, ignoring case.
    ///
    /// The match is equality, not substring: the stringified field value is
    /// lower-cased and compared against the lower-cased query. The year is
    /// stringified through its decimal rendering, so `"1965"` matches year
    /// 1965 and `"1965.0"` does not.
    ///
    /// Returns an empty vec when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn search(&self, query: &str, field: SearchField) -> CatalogResult<Vec<Book>> {
        let books = self.store.load()?;
        let needle = query.to_lowercase();

        Ok(books
            .into_iter()
            .filter(|book| field_value(book, field).to_lowercase() == needle)
            .collect())
    }

    /// Returns the full collection in persisted (insertion) order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn list_all(&self) -> CatalogResult<Vec<Book>> {
        self.store.load()
    }

    /// Replaces the status of the book with the given id and persists.
    ///
    /// Only the status field changes; everything else, including the
    /// record's position, is preserved. An unknown id reports
    /// [`StatusOutcome::NotFound`] and performs no write.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn set_status(&self, id: BookId, status: BookStatus) -> CatalogResult<StatusOutcome> {
        let mut books = self.store.load()?;

        let Some(book) = books.iter_mut().find(|book| book.id == id) else {
            return Ok(StatusOutcome::NotFound);
        };

        book.status = status;
        let updated = book.clone();
        self.store.save(&books)?;

        tracing::debug!(id = %id, status = %status, "changed book status");
        Ok(StatusOutcome::Updated(updated))
    }
}

/// Stringifies the searched field of a record.
fn field_value(book: &Book, field: SearchField) -> String {
    match field {
        SearchField::Title => book.title.clone(),
        SearchField::Author => book.author.clone(),
        SearchField::Year => book.year.to_string(),
    }
}
