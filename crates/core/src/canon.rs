//! Canonical book order and filename matching.

use std::path::Path;

/// The 27 New Testament books, in canonical order, as named in the
/// Spanish source files.
pub const CANONICAL_BOOKS: [&str; 27] = [
    "Mateo",
    "Marcos",
    "Lucas",
    "Juan",
    "Hechos",
    "Romanos",
    "1 Corintios",
    "2 Corintios",
    "Gálatas",
    "Efesios",
    "Filipenses",
    "Colosenses",
    "1 Tesalonicenses",
    "2 Tesalonicenses",
    "1 Timoteo",
    "2 Timoteo",
    "Tito",
    "Filemón",
    "Hebreos",
    "Santiago",
    "1 Pedro",
    "2 Pedro",
    "1 Juan",
    "2 Juan",
    "3 Juan",
    "Judas",
    "Apocalipsis",
];

/// Returns the file name of `path` without its extension.
pub fn book_stem(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|stem| stem.to_str())
}

/// Case-insensitive comparison of a file stem against a book name.
///
/// Uses full Unicode lowercasing so accented names (`Gálatas`, `Filemón`)
/// match regardless of how the file was capitalised.
pub fn names_match(stem: &str, book_name: &str) -> bool {
    stem == book_name || stem.to_lowercase() == book_name.to_lowercase()
}

/// Whether `path`'s extension-stripped file name equals `book_name`.
pub fn path_matches(path: &Path, book_name: &str) -> bool {
    book_stem(path).is_some_and(|stem| names_match(stem, book_name))
}
