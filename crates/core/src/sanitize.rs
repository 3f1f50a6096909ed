//! Line sanitization: strip markup, decode entities, normalize whitespace.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Non-breaking-space entity used by the source corpus as a formatting placeholder.
pub const NBSP_ENTITY: &str = "&nbsp;";

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<.*?>").expect("tag pattern is valid"));

static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[A-Za-z]{2,8});").expect("entity pattern is valid")
});

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Result of sanitizing one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SanitizedLine {
    /// Nothing left after cleaning, or a placeholder-only block. Must not
    /// advance any parser state.
    Blank,
    /// A non-empty, trimmed line.
    Text(String),
}

impl SanitizedLine {
    pub fn is_blank(&self) -> bool {
        matches!(self, SanitizedLine::Blank)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SanitizedLine::Text(text) => Some(text),
            SanitizedLine::Blank => None,
        }
    }
}

/// Cleans one raw block into a line of plain text.
///
/// Blocks that start with `&nbsp;` carry only formatting and are reported as
/// [`SanitizedLine::Blank`] before any cleaning happens.
pub fn sanitize_line(block: &str, collapse_whitespace: bool) -> SanitizedLine {
    if block.trim_start().starts_with(NBSP_ENTITY) {
        return SanitizedLine::Blank;
    }

    let stripped = strip_tags(block);
    let decoded = decode_entities(&stripped.replace(NBSP_ENTITY, " ")).replace('\u{a0}', " ");

    let line = if collapse_whitespace {
        WHITESPACE_RE.replace_all(decoded.trim(), " ").into_owned()
    } else {
        decoded.trim().to_string()
    };

    if line.is_empty() { SanitizedLine::Blank } else { SanitizedLine::Text(line) }
}

/// Removes every `<...>` span, non-greedily and without nesting awareness.
pub fn strip_tags(block: &str) -> String {
    TAG_RE.replace_all(block, "").into_owned()
}

/// Decodes numeric character references, the predefined XML entities and
/// the Latin-1 named entities found in Spanish texts.
///
/// Unknown entities and references to invalid code points are left untouched.
pub fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &Captures| {
            let name = &caps[1];
            named_entity(name)
                .or_else(|| numeric_reference(name))
                .map_or_else(|| caps[0].to_string(), |c| c.to_string())
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<char> {
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "aacute" => 'á',
        "eacute" => 'é',
        "iacute" => 'í',
        "oacute" => 'ó',
        "uacute" => 'ú',
        "Aacute" => 'Á',
        "Eacute" => 'É',
        "Iacute" => 'Í',
        "Oacute" => 'Ó',
        "Uacute" => 'Ú',
        "ntilde" => 'ñ',
        "Ntilde" => 'Ñ',
        "uuml" => 'ü',
        "Uuml" => 'Ü',
        "iexcl" => '¡',
        "iquest" => '¿',
        "laquo" => '«',
        "raquo" => '»',
        "mdash" => '—',
        "ndash" => '–',
        _ => return None,
    };
    Some(c)
}

fn numeric_reference(name: &str) -> Option<char> {
    let digits = name.strip_prefix('#')?;
    let code = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<u32>().ok()?,
    };
    char::from_u32(code).filter(|c| is_xml_char(*c))
}

/// Whether `c` may appear in an XML 1.0 document.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..)
}
