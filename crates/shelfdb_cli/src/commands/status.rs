//! Status command implementation.

use shelfdb_core::{BookId, BookStatus, Catalog, StatusOutcome};

/// Runs the status command.
///
/// An unknown id is an outcome, not a failure: it prints a message and
/// exits cleanly.
pub fn run(
    catalog: &Catalog,
    id: BookId,
    status: BookStatus,
) -> Result<(), Box<dyn std::error::Error>> {
    match catalog.set_status(id, status)? {
        StatusOutcome::Updated(book) => {
            println!("\"{}\" (id {}) is now {}.", book.title, book.id, book.status);
        }
        StatusOutcome::NotFound => {
            println!("Book {id} not found.");
        }
    }
    Ok(())
}
