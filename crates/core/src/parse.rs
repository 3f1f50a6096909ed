//! Book parsing: drives splitting, sanitizing and classification over one
//! source file and accumulates the result into a [`Book`].
//!
//! # Example
//!
//! ```rust
//! use scriptura_core::{ConverterConfig, parse_book};
//!
//! let html = "<p>Evangelio según Lucas, capítulo 1</p><p>1 En el principio...</p>";
//! let book = parse_book("Lucas", html, &ConverterConfig::default());
//! assert_eq!(book.chapter(1).and_then(|c| c.verse(1)), Some("En el principio..."));
//! ```

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::classify::{Classifier, LineKind};
use crate::config::ConverterConfig;
use crate::model::{Book, Chapter, Verse};
use crate::sanitize::{SanitizedLine, sanitize_line};
use crate::split::split_blocks;
use crate::{Result, ScripturaError};

/// Parser position within a book.
#[derive(Debug)]
enum State {
    /// No valid heading seen yet; verses have nowhere to go.
    NoChapter,
    /// A chapter is open and accumulating verses.
    InChapter(Chapter),
}

/// Single-use parser that owns the book under construction.
///
/// Feed it lines with [`BookParser::feed_line`] and call
/// [`BookParser::finish`] to flush the last open chapter.
#[derive(Debug)]
pub struct BookParser {
    book: Book,
    state: State,
    classifier: Classifier,
    collapse_whitespace: bool,
}

impl BookParser {
    pub fn new(name: impl Into<String>, config: &ConverterConfig) -> Self {
        Self {
            book: Book::new(name),
            state: State::NoChapter,
            classifier: Classifier::new(&config.chapter_keyword),
            collapse_whitespace: config.collapse_whitespace,
        }
    }

    /// Number of the currently open chapter, if any.
    pub fn current_chapter(&self) -> Option<u32> {
        match &self.state {
            State::NoChapter => None,
            State::InChapter(chapter) => Some(chapter.number()),
        }
    }

    /// Sanitizes and applies one raw block. Blank blocks are skipped.
    pub fn feed_block(&mut self, block: &str) {
        match sanitize_line(block, self.collapse_whitespace) {
            SanitizedLine::Blank => trace!(book = self.book.name(), "skipping blank block"),
            SanitizedLine::Text(line) => self.feed_line(&line),
        }
    }

    /// Applies one sanitized, non-blank line.
    pub fn feed_line(&mut self, line: &str) {
        match self.classifier.classify(line) {
            LineKind::ChapterHeading { number: Some(number) } => self.open_chapter(number),
            LineKind::ChapterHeading { number: None } => {
                debug!(book = self.book.name(), line, "ignoring heading without a chapter number");
            }
            LineKind::Verse(Some(verse)) => self.record_verse(verse),
            LineKind::Verse(None) => {
                debug!(book = self.book.name(), line, "ignoring verse without a valid number");
            }
            LineKind::Other => {}
        }
    }

    fn open_chapter(&mut self, number: u32) {
        let previous = std::mem::replace(&mut self.state, State::InChapter(Chapter::new(number)));
        if let State::InChapter(chapter) = previous {
            self.book.commit_chapter(chapter);
        }
    }

    fn record_verse(&mut self, verse: Verse) {
        match &mut self.state {
            State::InChapter(chapter) => chapter.set_verse(verse),
            State::NoChapter => {
                debug!(book = self.book.name(), verse = verse.number, "dropping verse before first chapter heading");
            }
        }
    }

    /// Commits the open chapter, if any, and returns the finished book.
    pub fn finish(mut self) -> Book {
        if let State::InChapter(chapter) = self.state {
            self.book.commit_chapter(chapter);
        }
        debug!(
            book = self.book.name(),
            chapters = self.book.chapter_count(),
            verses = self.book.verse_count(),
            "parsed book"
        );
        self.book
    }
}

/// Parses the HTML `content` of one book.
pub fn parse_book(name: &str, content: &str, config: &ConverterConfig) -> Book {
    let mut parser = BookParser::new(name, config);
    for block in split_blocks(content, &config.paragraph_marker) {
        parser.feed_block(block);
    }
    parser.finish()
}

/// Reads and parses the book at `path`, naming it after the file stem.
///
/// # Errors
///
/// Returns [`ScripturaError::ReadError`] if the file cannot be read as UTF-8.
pub fn parse_book_file(path: &Path, config: &ConverterConfig) -> Result<Book> {
    let content =
        fs::read_to_string(path).map_err(|source| ScripturaError::ReadError { path: path.to_path_buf(), source })?;
    let name = crate::canon::book_stem(path).unwrap_or_default();
    Ok(parse_book(name, &content, config))
}
