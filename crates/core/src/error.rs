//! Error types for Scriptura operations.
//!
//! This module defines the main error type [`ScripturaError`]. Only input
//! validation and file access failures are represented here: anomalies inside
//! a book's text (malformed headings, stray verses, blank paragraphs) are
//! skipped by the parser and never surface as errors.
//!
//! # Example
//!
//! ```rust
//! use scriptura_core::{ScripturaError, discover_inputs};
//!
//! match discover_inputs("/nonexistent/Mateo.html") {
//!     Err(ScripturaError::NotFound(path)) => println!("missing: {}", path.display()),
//!     Err(e) => println!("Error: {}", e),
//!     Ok(files) => println!("{} files", files.len()),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for conversion operations.
#[derive(Error, Debug)]
pub enum ScripturaError {
    /// Input path does not exist.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// Input path is a file but not an `.html` file.
    #[error("Not an HTML file: {0}")]
    WrongFormat(PathBuf),

    /// Input directory contains no `.html` files at any depth.
    #[error("No HTML files found in directory: {0}")]
    EmptyDirectory(PathBuf),

    /// A source book could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed part way.
    #[error("Failed to walk directory: {0}")]
    WalkError(String),

    /// Output could not be written.
    ///
    /// Wraps standard I/O errors for the output file and the XML writer.
    #[error("Failed to write output: {0}")]
    WriteError(#[from] std::io::Error),

    /// Document serialization failed.
    #[error("Failed to serialize document: {0}")]
    SerializeError(String),
}

impl From<walkdir::Error> for ScripturaError {
    fn from(err: walkdir::Error) -> Self {
        ScripturaError::WalkError(err.to_string())
    }
}

/// Result type alias for ScripturaError.
pub type Result<T> = std::result::Result<T, ScripturaError>;
