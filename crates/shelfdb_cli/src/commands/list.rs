//! List command implementation.

use crate::commands::print_book;
use shelfdb_core::Catalog;

/// Runs the list command.
pub fn run(catalog: &Catalog) -> Result<(), Box<dyn std::error::Error>> {
    let books = catalog.list_all()?;

    if books.is_empty() {
        println!("The catalog is empty.");
        return Ok(());
    }

    for book in &books {
        print_book(book);
    }
    Ok(())
}
