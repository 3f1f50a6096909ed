//! JSON rendering of an assembled [`Bible`].

use serde::Serialize;

use crate::model::{Bible, Book, Chapter};
use crate::{Result, ScripturaError};

/// Complete JSON output structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonBible<'a> {
    pub books: Vec<JsonBook<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonBook<'a> {
    pub name: &'a str,
    pub chapters: Vec<JsonChapter<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonChapter<'a> {
    pub number: u32,
    pub verses: Vec<JsonVerse<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonVerse<'a> {
    pub number: u32,
    pub text: &'a str,
}

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

impl<'a> From<&'a Book> for JsonBook<'a> {
    fn from(book: &'a Book) -> Self {
        Self { name: book.name(), chapters: book.chapters().map(JsonChapter::from).collect() }
    }
}

impl<'a> From<&'a Chapter> for JsonChapter<'a> {
    fn from(chapter: &'a Chapter) -> Self {
        Self {
            number: chapter.number(),
            verses: chapter.verses().map(|(number, text)| JsonVerse { number, text }).collect(),
        }
    }
}

impl<'a> From<&'a Bible> for JsonBible<'a> {
    fn from(bible: &'a Bible) -> Self {
        Self { books: bible.books().iter().map(JsonBook::from).collect() }
    }
}

/// Convert an assembled Bible to JSON
pub fn convert_to_json(bible: &Bible, config: &JsonConfig) -> Result<String> {
    let output = JsonBible::from(bible);

    if config.pretty {
        serde_json::to_string_pretty(&output).map_err(|e| ScripturaError::SerializeError(e.to_string()))
    } else {
        serde_json::to_string(&output).map_err(|e| ScripturaError::SerializeError(e.to_string()))
    }
}
