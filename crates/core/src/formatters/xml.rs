//! XML document writer.
//!
//! Produces `<bible>` → `<b n="…">` → `<c n="…">` → `<v n="…">text</v>`,
//! with chapters and verses in ascending numeric order.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::model::{Bible, Book, Chapter};
use crate::{Result, ScripturaError};

pub const BIBLE_TAG: &str = "bible";
pub const BOOK_TAG: &str = "b";
pub const CHAPTER_TAG: &str = "c";
pub const VERSE_TAG: &str = "v";
pub const NUMBER_ATTR: &str = "n";

/// Configuration for XML output
#[derive(Debug, Clone)]
pub struct XmlConfig {
    /// Spaces per nesting level; 0 writes everything on one line
    pub indent: usize,
    /// Emit the `<?xml version="1.0" encoding="utf-8"?>` declaration
    pub declaration: bool,
}

impl Default for XmlConfig {
    fn default() -> Self {
        Self { indent: 2, declaration: true }
    }
}

/// Streams `bible` as XML into `out` and hands the sink back.
pub fn write_xml<W: Write>(bible: &Bible, out: W, config: &XmlConfig) -> Result<W> {
    let mut writer =
        if config.indent > 0 { Writer::new_with_indent(out, b' ', config.indent) } else { Writer::new(out) };

    if config.declaration {
        emit(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    }

    emit(&mut writer, Event::Start(BytesStart::new(BIBLE_TAG)))?;
    for book in bible.books() {
        write_book(&mut writer, book)?;
    }
    emit(&mut writer, Event::End(BytesEnd::new(BIBLE_TAG)))?;

    Ok(writer.into_inner())
}

/// Renders `bible` as an XML string ending in a newline.
pub fn convert_to_xml(bible: &Bible, config: &XmlConfig) -> Result<String> {
    let mut buffer = write_xml(bible, Vec::new(), config)?;
    buffer.push(b'\n');
    String::from_utf8(buffer).map_err(|e| ScripturaError::SerializeError(e.to_string()))
}

fn write_book<W: Write>(writer: &mut Writer<W>, book: &Book) -> Result<()> {
    let mut start = BytesStart::new(BOOK_TAG);
    start.push_attribute((NUMBER_ATTR, book.name()));

    if book.chapter_count() == 0 {
        return emit(writer, Event::Empty(start));
    }

    emit(writer, Event::Start(start))?;
    for chapter in book.chapters() {
        write_chapter(writer, chapter)?;
    }
    emit(writer, Event::End(BytesEnd::new(BOOK_TAG)))
}

fn write_chapter<W: Write>(writer: &mut Writer<W>, chapter: &Chapter) -> Result<()> {
    let number = chapter.number().to_string();
    let mut start = BytesStart::new(CHAPTER_TAG);
    start.push_attribute((NUMBER_ATTR, number.as_str()));

    if chapter.is_empty() {
        return emit(writer, Event::Empty(start));
    }

    emit(writer, Event::Start(start))?;
    for (verse_number, text) in chapter.verses() {
        let verse_number = verse_number.to_string();
        let mut verse = BytesStart::new(VERSE_TAG);
        verse.push_attribute((NUMBER_ATTR, verse_number.as_str()));

        emit(writer, Event::Start(verse))?;
        emit(writer, Event::Text(BytesText::new(text)))?;
        emit(writer, Event::End(BytesEnd::new(VERSE_TAG)))?;
    }
    emit(writer, Event::End(BytesEnd::new(CHAPTER_TAG)))
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer.write_event(event).map_err(|e| ScripturaError::SerializeError(e.to_string()))
}
