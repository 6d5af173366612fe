//! Book record types and identifier allocation.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a book record.
///
/// Identifiers are positive, assigned as `max + 1` over the current
/// collection, and never reused after deletion.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BookId(pub u64);

impl BookId {
    /// Creates a book ID from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lending status of a book.
///
/// A closed set: any other value is rejected at the parse boundary, so a
/// stored collection can only ever hold these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookStatus {
    /// The book is on the shelf.
    Available,
    /// The book has been lent out.
    CheckedOut,
}

impl BookStatus {
    /// Returns the canonical string form, as persisted.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::CheckedOut => "checked-out",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookStatus {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "checked-out" => Ok(Self::CheckedOut),
            _ => Err(CatalogError::invalid_status(s)),
        }
    }
}

/// One catalogued book.
///
/// `id` is immutable after creation; `status` is the only field mutated in
/// place (via the set-status operation). Field order matches the persisted
/// JSON object key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier, assigned at creation.
    pub id: BookId,
    /// Title, non-empty.
    pub title: String,
    /// Author.
    pub author: String,
    /// Publication year.
    pub year: i32,
    /// Lending status.
    pub status: BookStatus,
}

/// Computes the next identifier for the given collection.
///
/// Returns `1` for an empty collection, else `max(ids) + 1`. Pure function
/// of the collection; deleted ids are never handed out again because the
/// maximum only grows while a record is present.
#[must_use]
pub fn next_id(books: &[Book]) -> BookId {
    books
        .iter()
        .map(|book| book.id.as_u64())
        .max()
        .map_or(BookId::new(1), |max| BookId::new(max + 1))
}
