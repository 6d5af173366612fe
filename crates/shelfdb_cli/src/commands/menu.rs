//! Interactive menu over the catalog operations.
//!
//! Line-oriented prompt loop: six actions, each mapping to exactly one
//! catalog operation. Invalid numeric input re-prompts; unknown ids are
//! printed outcomes. Store and I/O errors terminate the loop.

use shelfdb_core::{
    BookId, BookStatus, Catalog, CatalogError, RemoveOutcome, SearchField, StatusOutcome,
};
use std::io::{self, BufRead, Write};

/// Runs the interactive menu against stdin/stdout.
pub fn run(catalog: &Catalog) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_loop(catalog, &mut input, &mut output)
}

/// The menu loop, with explicit input/output for testing.
fn run_loop<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: &mut R,
    output: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        writeln!(output)?;
        writeln!(output, "Book catalog")?;
        writeln!(output, "1. Add a book")?;
        writeln!(output, "2. Remove a book")?;
        writeln!(output, "3. Search for a book")?;
        writeln!(output, "4. List all books")?;
        writeln!(output, "5. Change a book's status")?;
        writeln!(output, "6. Exit")?;

        let Some(choice) = prompt(input, output, "Choose an action: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => add(catalog, input, output)?,
            "2" => remove(catalog, input, output)?,
            "3" => search(catalog, input, output)?,
            "4" => list(catalog, output)?,
            "5" => change_status(catalog, input, output)?,
            "6" => return Ok(()),
            other => {
                tracing::debug!(choice = other, "invalid menu selection");
                writeln!(output, "Invalid choice. Try again.")?;
            }
        }
    }
}

fn add<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: &mut R,
    output: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(title) = prompt(input, output, "Title: ")? else {
        return Ok(());
    };
    let Some(author) = prompt(input, output, "Author: ")? else {
        return Ok(());
    };
    let Some(year) = prompt_i32(input, output, "Year: ")? else {
        return Ok(());
    };

    match catalog.add(&title, &author, year) {
        Ok(book) => writeln!(output, "Added \"{}\" with id {}.", book.title, book.id)?,
        Err(CatalogError::EmptyTitle) => writeln!(output, "The title must not be empty.")?,
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn remove<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: &mut R,
    output: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(id) = prompt_u64(input, output, "Id of the book to remove: ")? else {
        return Ok(());
    };

    match catalog.remove(BookId::new(id))? {
        RemoveOutcome::Removed(book) => {
            writeln!(output, "Removed \"{}\" (id {}).", book.title, book.id)?;
        }
        RemoveOutcome::NotFound => writeln!(output, "Book {id} not found.")?,
    }
    Ok(())
}

fn search<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: &mut R,
    output: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(query) = prompt(input, output, "Search query: ")? else {
        return Ok(());
    };

    let hits = catalog.search(&query, SearchField::Title)?;
    if hits.is_empty() {
        writeln!(output, "No books match {query:?}.")?;
    } else {
        for book in &hits {
            write_book(output, book)?;
        }
    }
    Ok(())
}

fn list<W: Write>(catalog: &Catalog, output: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    let books = catalog.list_all()?;
    if books.is_empty() {
        writeln!(output, "The catalog is empty.")?;
    } else {
        for book in &books {
            write_book(output, book)?;
        }
    }
    Ok(())
}

fn change_status<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: &mut R,
    output: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(id) = prompt_u64(input, output, "Id of the book: ")? else {
        return Ok(());
    };
    let Some(raw) = prompt(input, output, "New status (available / checked-out): ")? else {
        return Ok(());
    };

    let status: BookStatus = match raw.parse() {
        Ok(status) => status,
        Err(err) => {
            writeln!(output, "{err}")?;
            return Ok(());
        }
    };

    match catalog.set_status(BookId::new(id), status)? {
        StatusOutcome::Updated(book) => {
            writeln!(output, "\"{}\" (id {}) is now {}.", book.title, book.id, book.status)?;
        }
        StatusOutcome::NotFound => writeln!(output, "Book {id} not found.")?,
    }
    Ok(())
}

fn write_book<W: Write>(output: &mut W, book: &shelfdb_core::Book) -> io::Result<()> {
    writeln!(
        output,
        "ID: {}, Title: {}, Author: {}, Year: {}, Status: {}",
        book.id, book.title, book.author, book.year, book.status
    )
}

/// Prompts for one line. Returns `None` on end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Prompts until the input parses as a u64. Returns `None` on end of input.
fn prompt_u64<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<u64>> {
    loop {
        let Some(line) = prompt(input, output, label)? else {
            return Ok(None);
        };
        match line.trim().parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(output, "Enter a whole number.")?,
        }
    }
}

/// Prompts until the input parses as an i32. Returns `None` on end of input.
fn prompt_i32<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<i32>> {
    loop {
        let Some(line) = prompt(input, output, label)? else {
            return Ok(None);
        };
        match line.trim().parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(output, "Enter a whole number.")?,
        }
    }
}
