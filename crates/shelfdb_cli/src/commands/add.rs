//! Add command implementation.

use shelfdb_core::Catalog;

/// Runs the add command.
pub fn run(
    catalog: &Catalog,
    title: &str,
    author: &str,
    year: i32,
) -> Result<(), Box<dyn std::error::Error>> {
    let book = catalog.add(title, author, year)?;
    println!("Added \"{}\" with id {}.", book.title, book.id);
    Ok(())
}
