//! CLI command implementations.

pub mod add;
pub mod list;
pub mod menu;
pub mod remove;
pub mod search;
pub mod status;

use shelfdb_core::Book;

/// Prints one book in the standard single-line format.
pub(crate) fn print_book(book: &Book) {
    println!(
        "ID: {}, Title: {}, Author: {}, Year: {}, Status: {}",
        book.id, book.title, book.author, book.year, book.status
    );
}
