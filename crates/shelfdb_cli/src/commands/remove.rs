//! Remove command implementation.

use shelfdb_core::{BookId, Catalog, RemoveOutcome};

/// Runs the remove command.
///
/// An unknown id is an outcome, not a failure: it prints a message and
/// exits cleanly.
pub fn run(catalog: &Catalog, id: BookId) -> Result<(), Box<dyn std::error::Error>> {
    match catalog.remove(id)? {
        RemoveOutcome::Removed(book) => {
            println!("Removed \"{}\" (id {}).", book.title, book.id);
        }
        RemoveOutcome::NotFound => {
            println!("Book {id} not found.");
        }
    }
    Ok(())
}
