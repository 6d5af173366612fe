//! Property-based test generators using proptest.
//!
//! Provides strategies for generating record data that maintains the
//! catalog's invariants (non-empty titles, pairwise-distinct ids).

use proptest::prelude::*;
use shelfdb_core::{Book, BookId, BookStatus};

/// Strategy for titles: printable, non-blank.
pub fn title_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("\\PC{1,60}")
        .expect("Invalid regex")
        .prop_filter("Title must not be blank", |s| !s.trim().is_empty())
}

/// Strategy for authors: printable, may be empty.
pub fn author_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("\\PC{0,60}").expect("Invalid regex")
}

/// Strategy for publication years.
pub fn year_strategy() -> impl Strategy<Value = i32> {
    -3000..3000i32
}

/// Strategy for lending statuses.
pub fn status_strategy() -> impl Strategy<Value = BookStatus> {
    prop_oneof![Just(BookStatus::Available), Just(BookStatus::CheckedOut)]
}

/// Strategy for a single book with the given id.
pub fn book_strategy(id: u64) -> impl Strategy<Value = Book> {
    (
        title_strategy(),
        author_strategy(),
        year_strategy(),
        status_strategy(),
    )
        .prop_map(move |(title, author, year, status)| Book {
            id: BookId::new(id),
            title,
            author,
            year,
            status,
        })
}

/// Strategy for a whole collection with sequential ids starting at 1.
pub fn collection_strategy(max_len: usize) -> impl Strategy<Value = Vec<Book>> {
    prop::collection::vec(
        (
            title_strategy(),
            author_strategy(),
            year_strategy(),
            status_strategy(),
        ),
        0..=max_len,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(index, (title, author, year, status))| Book {
                id: BookId::new(index as u64 + 1),
                title,
                author,
                year,
                status,
            })
            .collect()
    })
}
