//! shelfdb CLI
//!
//! Command-line front end for the shelfdb book catalog.
//!
//! # Commands
//!
//! - `add` - Add a book to the catalog
//! - `remove` - Remove a book by id
//! - `search` - Search by title, author or year
//! - `list` - List the whole catalog
//! - `status` - Change a book's lending status
//! - `menu` - Interactive menu over the same operations
//!
//! Every command maps to exactly one catalog operation; the catalog itself
//! lives in `shelfdb_core`.

mod commands;

use clap::{Parser, Subcommand};
use shelfdb_core::{BookId, BookStatus, Catalog, SearchField};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// shelfdb command-line catalog manager.
#[derive(Parser)]
#[command(name = "shelfdb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the catalog file
    #[arg(global = true, short, long, default_value = "books.json")]
    file: PathBuf,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a book to the catalog
    Add {
        /// Book title
        title: String,

        /// Book author
        #[arg(short, long)]
        author: String,

        /// Publication year
        #[arg(short, long)]
        year: i32,
    },

    /// Remove a book by id
    Remove {
        /// Id of the book to remove
        id: u64,
    },

    /// Search the catalog
    Search {
        /// Query to match (case-insensitive equality)
        query: String,

        /// Field to match against (title, author, year)
        #[arg(short = 'F', long, default_value = "title")]
        field: SearchField,
    },

    /// List all books
    List,

    /// Change a book's lending status
    Status {
        /// Id of the book
        id: u64,

        /// New status (available, checked-out)
        status: BookStatus,
    },

    /// Run the interactive menu
    Menu,

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if matches!(cli.command, Commands::Version) {
        println!("shelfdb CLI v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let catalog = Catalog::open(&cli.file)?;

    match cli.command {
        Commands::Add {
            title,
            author,
            year,
        } => commands::add::run(&catalog, &title, &author, year)?,
        Commands::Remove { id } => commands::remove::run(&catalog, BookId::new(id))?,
        Commands::Search { query, field } => commands::search::run(&catalog, &query, field)?,
        Commands::List => commands::list::run(&catalog)?,
        Commands::Status { id, status } => {
            commands::status::run(&catalog, BookId::new(id), status)?;
        }
        Commands::Menu => commands::menu::run(&catalog)?,
        Commands::Version => unreachable!("handled above"),
    }

    Ok(())
}
