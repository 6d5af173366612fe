//! Search command implementation.

use crate::commands::print_book;
use shelfdb_core::{Catalog, SearchField};

/// Runs the search command.
pub fn run(
    catalog: &Catalog,
    query: &str,
    field: SearchField,
) -> Result<(), Box<dyn std::error::Error>> {
    let hits = catalog.search(query, field)?;

    if hits.is_empty() {
        println!("No books match {query:?} by {field}.");
        return Ok(());
    }

    for book in &hits {
        print_book(book);
    }
    Ok(())
}
