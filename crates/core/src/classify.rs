//! Chapter/verse classification of sanitized lines.

use crate::model::Verse;

/// What a sanitized line denotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Contains the chapter keyword. `number` is `None` when the trailing
    /// token is not a positive integer.
    ChapterHeading { number: Option<u32> },
    /// Starts with a digit. `None` when the leading token is not a positive
    /// integer.
    Verse(Option<Verse>),
    /// Neither heading nor verse.
    Other,
}

/// Classifies lines against a chapter keyword.
///
/// The keyword is lowercased once up front; each line is lowercased for the
/// containment test only.
#[derive(Debug, Clone)]
pub struct Classifier {
    keyword: String,
}

impl Classifier {
    pub fn new(chapter_keyword: &str) -> Self {
        Self { keyword: chapter_keyword.to_lowercase() }
    }

    /// Classifies one non-blank sanitized line.
    ///
    /// The heading test runs first, so a line that also starts with a digit
    /// is still a heading.
    pub fn classify(&self, line: &str) -> LineKind {
        if self.is_heading(line) {
            let number = line.split_whitespace().next_back().and_then(parse_number);
            return LineKind::ChapterHeading { number };
        }

        if line.starts_with(|c: char| c.is_ascii_digit()) {
            let (token, text) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
            let verse = parse_number(token).map(|number| Verse::new(number, text.trim()));
            return LineKind::Verse(verse);
        }

        LineKind::Other
    }

    fn is_heading(&self, line: &str) -> bool {
        !self.keyword.is_empty() && line.to_lowercase().contains(&self.keyword)
    }
}

/// Parses a chapter or verse number. Zero is not a valid number.
pub fn parse_number(token: &str) -> Option<u32> {
    token.parse::<u32>().ok().filter(|n| *n > 0)
}
