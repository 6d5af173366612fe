//! Error types for catalog operations.

use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur in catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Storage backend error.
    #[error("storage error: {0}")]
    Storage(#[from] shelfdb_storage::StorageError),

    /// The backing file exists but does not hold a valid collection.
    ///
    /// Surfaced instead of silently substituting an empty collection so the
    /// caller can refuse to overwrite the damaged snapshot.
    #[error("corrupt catalog snapshot: {source}")]
    CorruptStore {
        /// The decode failure.
        #[source]
        source: serde_json::Error,
    },

    /// The collection could not be encoded for persistence.
    #[error("failed to encode catalog snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    /// A record title must be non-empty.
    #[error("book title must not be empty")]
    EmptyTitle,

    /// A status string outside the recognized set.
    #[error("invalid status {value:?}: expected \"available\" or \"checked-out\"")]
    InvalidStatus {
        /// The rejected value.
        value: String,
    },

    /// A search field outside the supported set.
    #[error("unsupported search field {field:?}: expected \"title\", \"author\" or \"year\"")]
    UnsupportedField {
        /// The rejected field name.
        field: String,
    },
}

impl CatalogError {
    /// Creates a corrupt-store error from a decode failure.
    #[must_use]
    pub fn corrupt_store(source: serde_json::Error) -> Self {
        Self::CorruptStore { source }
    }

    /// Creates an invalid-status error.
    pub fn invalid_status(value: impl Into<String>) -> Self {
        Self::InvalidStatus {
            value: value.into(),
        }
    }

    /// Creates an unsupported-field error.
    pub fn unsupported_field(field: impl Into<String>) -> Self {
        Self::UnsupportedField {
            field: field.into(),
        }
    }
}
