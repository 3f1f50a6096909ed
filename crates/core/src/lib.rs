//! Converts paragraph-delimited Bible HTML books into one canonical
//! book → chapter → verse document.
//!
//! ```rust,no_run
//! use scriptura_core::{OutputFormat, convert_path, render};
//!
//! let bible = convert_path("libros/")?;
//! let xml = render(&bible, OutputFormat::Xml, 2)?;
//! std::fs::write("bible.xml", xml)?;
//! # Ok::<(), scriptura_core::ScripturaError>(())
//! ```

pub mod assemble;
pub mod canon;
pub mod classify;
pub mod config;
pub mod error;
pub mod formatters;
pub mod model;
pub mod parse;
pub mod sanitize;
pub mod source;
pub mod split;

pub use assemble::{BibleAssembler, PlannedBook, assemble_bible, convert_path};
pub use canon::CANONICAL_BOOKS;
#[doc(hidden)]
pub use classify::{Classifier, LineKind, parse_number};
pub use config::{ConverterConfig, ConverterConfigBuilder};
pub use error::{Result, ScripturaError};
#[cfg(feature = "json")]
pub use formatters::{JsonConfig, convert_to_json};
pub use formatters::{OutputFormat, XmlConfig, convert_to_xml, render, write_xml};
pub use model::{Bible, Book, Chapter, Verse};
pub use parse::{BookParser, parse_book, parse_book_file};
#[doc(hidden)]
pub use sanitize::{SanitizedLine, sanitize_line};
pub use source::discover_inputs;
#[doc(hidden)]
pub use split::{TextBlocks, split_blocks};
