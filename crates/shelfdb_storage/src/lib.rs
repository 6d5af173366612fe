//! # shelfdb Storage
//!
//! Snapshot storage backends for shelfdb.
//!
//! This crate provides the lowest-level storage abstraction for shelfdb.
//! Backends are **opaque snapshot stores** - they hold one complete blob of
//! bytes and replace it wholesale. They do not interpret the data they store.
//!
//! ## Design Principles
//!
//! - Backends hold exactly one snapshot (read the whole thing, write the
//!   whole thing)
//! - A write leaves either the previous snapshot or the new one readable,
//!   never a mix
//! - No knowledge of the catalog file format - shelfdb owns all
//!   interpretation
//! - Must be `Send + Sync`
//!
//! ## Available Backends
//!
//! - [`MemoryBackend`] - For testing and ephemeral storage
//! - [`FileBackend`] - For persistent storage using OS file APIs
//!
//! ## Example
//!
//! ```rust
//! use shelfdb_storage::{MemoryBackend, SnapshotBackend};
//!
//! let backend = MemoryBackend::new();
//! assert!(backend.read().unwrap().is_none());
//! backend.write(b"[]").unwrap();
//! assert_eq!(backend.read().unwrap().as_deref(), Some(&b"[]"[..]));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod file;
mod memory;

pub use backend::SnapshotBackend;
pub use error::{StorageError, StorageResult};
pub use file::FileBackend;
pub use memory::MemoryBackend;
