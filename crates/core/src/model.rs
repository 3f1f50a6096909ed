//! In-memory document model: [`Bible`] → [`Book`] → [`Chapter`] → verses.
//!
//! Chapters and verses are keyed by number rather than stored positionally so
//! that duplicate or out-of-order markers in the source collapse onto the
//! same slot. Keys iterate in ascending numeric order.

use std::collections::BTreeMap;

/// A single numbered verse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    /// Verse number, always at least 1.
    pub number: u32,
    /// Verse text with surrounding whitespace removed.
    pub text: String,
}

impl Verse {
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self { number, text: text.into() }
    }
}

/// A numbered chapter mapping verse numbers to verse text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    number: u32,
    verses: BTreeMap<u32, String>,
}

impl Chapter {
    /// Creates an empty chapter.
    pub fn new(number: u32) -> Self {
        Self { number, verses: BTreeMap::new() }
    }

    /// The chapter number, fixed at creation.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Returns the text of verse `number`, if recorded.
    pub fn verse(&self, number: u32) -> Option<&str> {
        self.verses.get(&number).map(String::as_str)
    }

    /// Records a verse, replacing any earlier text under the same number.
    pub fn set_verse(&mut self, verse: Verse) {
        self.verses.insert(verse.number, verse.text);
    }

    /// Recorded verse numbers in ascending order.
    pub fn verse_numbers(&self) -> Vec<u32> {
        self.verses.keys().copied().collect()
    }

    /// Iterates `(number, text)` pairs in ascending verse order.
    pub fn verses(&self) -> impl Iterator<Item = (u32, &str)> {
        self.verses.iter().map(|(number, text)| (*number, text.as_str()))
    }

    pub fn verse_count(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// Moves every verse of `other` into this chapter; `other` wins on conflicts.
    fn absorb(&mut self, other: Chapter) {
        self.verses.extend(other.verses);
    }
}

/// A book: its name and its chapters keyed by number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    name: String,
    chapters: BTreeMap<u32, Chapter>,
}

impl Book {
    /// Creates an empty book.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), chapters: BTreeMap::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns chapter `number`, if recorded.
    pub fn chapter(&self, number: u32) -> Option<&Chapter> {
        self.chapters.get(&number)
    }

    /// Commits a chapter under its own number.
    ///
    /// If the book already holds a chapter with that number the verses are
    /// merged, with the incoming chapter's text winning for repeated verses.
    pub fn commit_chapter(&mut self, chapter: Chapter) {
        match self.chapters.get_mut(&chapter.number) {
            Some(existing) => existing.absorb(chapter),
            None => {
                self.chapters.insert(chapter.number, chapter);
            }
        }
    }

    /// Recorded chapter numbers in ascending order.
    pub fn chapter_numbers(&self) -> Vec<u32> {
        self.chapters.keys().copied().collect()
    }

    /// Iterates chapters in ascending order.
    pub fn chapters(&self) -> impl Iterator<Item = &Chapter> {
        self.chapters.values()
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Total verses across all chapters.
    pub fn verse_count(&self) -> usize {
        self.chapters.values().map(Chapter::verse_count).sum()
    }
}

/// The assembled document: books in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bible {
    books: Vec<Book>,
}

impl Bible {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a book after those already present.
    pub fn push_book(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Looks a book up by exact name.
    pub fn book(&self, name: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn chapter_count(&self) -> usize {
        self.books.iter().map(Book::chapter_count).sum()
    }

    pub fn verse_count(&self) -> usize {
        self.books.iter().map(Book::verse_count).sum()
    }
}
