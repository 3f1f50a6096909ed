//! Converter configuration.
//!
//! [`ConverterConfig`] carries the textual conventions of the source corpus
//! (the paragraph marker, the localized chapter keyword) and the canonical
//! book list used to order the assembled document.
//!
//! # Example
//!
//! ```rust
//! use scriptura_core::ConverterConfig;
//!
//! let config = ConverterConfig::builder()
//!     .chapter_keyword("chapter")
//!     .canonical_books(["Matthew", "Mark", "Luke", "John"])
//!     .build();
//! assert_eq!(config.canonical_books.len(), 4);
//! ```

use crate::canon::CANONICAL_BOOKS;

/// Default localized keyword identifying a chapter heading.
pub const DEFAULT_CHAPTER_KEYWORD: &str = "capítulo";

/// Default paragraph-opening marker blocks are split on.
pub const DEFAULT_PARAGRAPH_MARKER: &str = "<p>";

/// Configuration for parsing and assembling books.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Keyword whose presence marks a chapter heading, matched case-insensitively
    /// (default: "capítulo").
    pub chapter_keyword: String,

    /// Literal marker that opens each paragraph block (default: "<p>").
    pub paragraph_marker: String,

    /// Book names in output order (default: the Spanish New Testament).
    pub canonical_books: Vec<String>,

    /// Whether runs of internal whitespace in a line collapse to one space (default: true).
    pub collapse_whitespace: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            chapter_keyword: DEFAULT_CHAPTER_KEYWORD.to_string(),
            paragraph_marker: DEFAULT_PARAGRAPH_MARKER.to_string(),
            canonical_books: CANONICAL_BOOKS.iter().map(|name| name.to_string()).collect(),
            collapse_whitespace: true,
        }
    }
}

impl ConverterConfig {
    /// Creates a new builder for ConverterConfig.
    pub fn builder() -> ConverterConfigBuilder {
        ConverterConfigBuilder::new()
    }
}

/// Builder for ConverterConfig.
pub struct ConverterConfigBuilder {
    config: ConverterConfig,
}

impl ConverterConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ConverterConfig::default() }
    }

    /// Sets the chapter keyword.
    pub fn chapter_keyword(mut self, value: impl Into<String>) -> Self {
        self.config.chapter_keyword = value.into();
        self
    }

    /// Sets the paragraph marker.
    pub fn paragraph_marker(mut self, value: impl Into<String>) -> Self {
        self.config.paragraph_marker = value.into();
        self
    }

    /// Replaces the canonical book list.
    pub fn canonical_books<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.canonical_books = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets whether internal whitespace is collapsed.
    pub fn collapse_whitespace(mut self, value: bool) -> Self {
        self.config.collapse_whitespace = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> ConverterConfig {
        self.config
    }
}

impl Default for ConverterConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
