//! Input discovery.
//!
//! Resolves the user-supplied path into the list of `.html` books to consider:
//! a single file, or every `.html` file beneath a directory.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{Result, ScripturaError};

/// Extension accepted for source books, compared case-insensitively.
pub const HTML_EXTENSION: &str = "html";

/// Whether `path` has an `.html` extension.
pub fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(HTML_EXTENSION))
}

/// Resolves `input` into the HTML files to convert.
///
/// Directory entries are returned sorted by file name at each level, so the
/// result does not depend on filesystem enumeration order.
///
/// # Errors
///
/// - [`ScripturaError::NotFound`] if `input` does not exist
/// - [`ScripturaError::WrongFormat`] if `input` is a file without an `.html` extension
/// - [`ScripturaError::EmptyDirectory`] if a directory holds no `.html` files
/// - [`ScripturaError::WalkError`] if the directory cannot be traversed
pub fn discover_inputs(input: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let input = input.as_ref();

    if !input.exists() {
        return Err(ScripturaError::NotFound(input.to_path_buf()));
    }

    if !input.is_dir() {
        return if is_html(input) {
            Ok(vec![input.to_path_buf()])
        } else {
            Err(ScripturaError::WrongFormat(input.to_path_buf()))
        };
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(input).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && is_html(entry.path()) {
            files.push(entry.into_path());
        }
    }

    if files.is_empty() { Err(ScripturaError::EmptyDirectory(input.to_path_buf())) } else { Ok(files) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_path() {
        let result = discover_inputs("/nonexistent/path/Mateo.html");
        assert!(matches!(result, Err(ScripturaError::NotFound(_))));
    }

    #[test]
    fn test_wrong_extension() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Mateo.txt");
        fs::write(&path, "capítulo 1").unwrap();

        assert!(matches!(discover_inputs(&path), Err(ScripturaError::WrongFormat(_))));
    }

    #[test]
    fn test_single_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Mateo.HTML");
        fs::write(&path, "").unwrap();

        assert_eq!(discover_inputs(&path).unwrap(), vec![path]);
    }

    #[test]
    fn test_empty_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("notas.txt"), "").unwrap();

        assert!(matches!(discover_inputs(tmp.path()), Err(ScripturaError::EmptyDirectory(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_books_are_included() {
        let tmp = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        let target = outside.path().join("judas-original.html");
        fs::write(&target, "").unwrap();

        let libros = tmp.path().join("libros");
        fs::create_dir(&libros).unwrap();
        fs::write(libros.join("Tito.html"), "").unwrap();
        std::os::unix::fs::symlink(&target, libros.join("Judas.html")).unwrap();

        let files = discover_inputs(&libros).unwrap();
        let names: Vec<&str> = files.iter().filter_map(|p| p.file_name()?.to_str()).collect();
        assert_eq!(names, vec!["Judas.html", "Tito.html"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_of_only_symlinks_is_not_empty() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("fuente.txt");
        fs::write(&target, "").unwrap();

        let libros = tmp.path().join("libros");
        fs::create_dir(&libros).unwrap();
        std::os::unix::fs::symlink(&target, libros.join("Tito.html")).unwrap();

        assert_eq!(discover_inputs(&libros).unwrap().len(), 1);
    }

    #[test]
    fn test_directory_is_walked_recursively_and_sorted() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("evangelios");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("Marcos.html"), "").unwrap();
        fs::write(tmp.path().join("Romanos.html"), "").unwrap();
        fs::write(tmp.path().join("Hechos.html"), "").unwrap();
        fs::write(tmp.path().join("leeme.md"), "").unwrap();

        let files = discover_inputs(tmp.path()).unwrap();
        let names: Vec<&str> = files.iter().filter_map(|p| p.file_name()?.to_str()).collect();
        assert_eq!(names, vec!["Hechos.html", "Romanos.html", "Marcos.html"]);
    }
}
