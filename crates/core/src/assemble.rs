//! Canonical-order assembly of parsed books into a [`Bible`].
//!
//! The main entry point is [`BibleAssembler`], along with the convenience
//! functions [`assemble_bible`] and [`convert_path`].
//!
//! # Example
//!
//! ```rust,no_run
//! use scriptura_core::{BibleAssembler, ConverterConfig};
//!
//! let assembler = BibleAssembler::with_config(ConverterConfig::default());
//! let bible = assembler.convert("libros/")?;
//! println!("{} books", bible.books().len());
//! # Ok::<(), scriptura_core::ScripturaError>(())
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::Result;
use crate::canon::{names_match, path_matches};
use crate::config::ConverterConfig;
use crate::model::{Bible, Book};
use crate::parse::parse_book_file;
use crate::source::discover_inputs;

/// A canonical slot paired with the file chosen to fill it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedBook<'a> {
    /// Position in the canonical list.
    pub position: usize,
    /// Canonical book name.
    pub name: &'a str,
    /// Source file for the book.
    pub path: &'a Path,
}

/// Merges per-book parses into one document in canonical order.
#[derive(Debug, Clone, Default)]
pub struct BibleAssembler {
    config: ConverterConfig,
}

impl BibleAssembler {
    /// Creates an assembler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Matches each canonical name to the first file whose stem equals it.
    ///
    /// Canonical names with no file are skipped. Files matching no canonical
    /// name, and later files repeating an already matched name, are left out
    /// with a warning.
    pub fn plan<'a>(&'a self, files: &'a [PathBuf]) -> Vec<PlannedBook<'a>> {
        let mut planned = Vec::new();

        for (position, name) in self.config.canonical_books.iter().enumerate() {
            let mut matches = files.iter().filter(|path| path_matches(path, name));
            match matches.next() {
                Some(path) => planned.push(PlannedBook { position, name: name.as_str(), path: path.as_path() }),
                None => debug!(book = name.as_str(), "no source file for canonical book"),
            }
            for duplicate in matches {
                warn!(book = name.as_str(), path = %duplicate.display(), "ignoring duplicate source file");
            }
        }

        for path in files {
            if !self.config.canonical_books.iter().any(|name| path_matches(path, name)) {
                warn!(path = %path.display(), "file matches no canonical book, skipping");
            }
        }

        planned
    }

    /// Parses the planned files and returns them as one [`Bible`].
    ///
    /// # Errors
    ///
    /// Returns the first read failure; no partial document is produced.
    pub fn assemble(&self, files: &[PathBuf]) -> Result<Bible> {
        let mut bible = Bible::new();
        for planned in self.plan(files) {
            let book = parse_book_file(planned.path, &self.config)?;
            bible.push_book(book);
        }
        Ok(bible)
    }

    /// Discovers inputs under `input` and assembles them.
    pub fn convert(&self, input: impl AsRef<Path>) -> Result<Bible> {
        let files = discover_inputs(input)?;
        self.assemble(&files)
    }

    /// Orders already-parsed books by the canonical list.
    ///
    /// Book names are compared case-insensitively; books with no canonical
    /// slot are dropped, and only the first book per slot is kept.
    pub fn order_books(&self, books: Vec<Book>) -> Bible {
        let mut slots: Vec<Option<Book>> = vec![None; self.config.canonical_books.len()];

        for book in books {
            let position = self.config.canonical_books.iter().position(|name| names_match(book.name(), name));
            match position {
                Some(position) if slots[position].is_none() => slots[position] = Some(book),
                Some(_) => warn!(book = book.name(), "ignoring duplicate book"),
                None => warn!(book = book.name(), "book matches no canonical name, skipping"),
            }
        }

        let mut bible = Bible::new();
        for book in slots.into_iter().flatten() {
            bible.push_book(book);
        }
        bible
    }
}

/// Assembles `files` with the given configuration.
pub fn assemble_bible(files: &[PathBuf], config: &ConverterConfig) -> Result<Bible> {
    BibleAssembler::with_config(config.clone()).assemble(files)
}

/// Discovers, parses and assembles everything under `input` with the default configuration.
pub fn convert_path(input: impl AsRef<Path>) -> Result<Bible> {
    BibleAssembler::new().convert(input)
}
