//! Paragraph block splitting.
//!
//! Source books are not well-formed HTML, so blocks are cut on the literal
//! paragraph-opening marker rather than through a DOM.

/// Lazy iterator over the text blocks of one source file.
///
/// Cloning the iterator restarts from the clone point, so a fresh
/// [`split_blocks`] call or a saved clone can replay the sequence.
#[derive(Debug, Clone)]
pub struct TextBlocks<'a> {
    rest: Option<&'a str>,
    marker: &'a str,
}

/// Splits `content` on every occurrence of `marker`.
///
/// Content before the first marker is yielded as its own block. An input with
/// no marker, or an empty marker, yields exactly one block.
pub fn split_blocks<'a>(content: &'a str, marker: &'a str) -> TextBlocks<'a> {
    TextBlocks { rest: Some(content), marker }
}

impl<'a> Iterator for TextBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;

        if !self.marker.is_empty()
            && let Some(pos) = rest.find(self.marker)
        {
            self.rest = Some(&rest[pos + self.marker.len()..]);
            return Some(&rest[..pos]);
        }

        self.rest = None;
        Some(rest)
    }
}

impl std::iter::FusedIterator for TextBlocks<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_paragraph_marker() {
        let blocks: Vec<&str> = split_blocks("<body><p>uno</p><p>dos</p>", "<p>").collect();
        assert_eq!(blocks, vec!["<body>", "uno</p>", "dos</p>"]);
    }

    #[test]
    fn test_no_marker_yields_whole_content() {
        let blocks: Vec<&str> = split_blocks("sin párrafos", "<p>").collect();
        assert_eq!(blocks, vec!["sin párrafos"]);
    }

    #[test]
    fn test_empty_input_yields_single_empty_block() {
        let blocks: Vec<&str> = split_blocks("", "<p>").collect();
        assert_eq!(blocks, vec![""]);
    }

    #[test]
    fn test_empty_marker_yields_whole_content() {
        let blocks: Vec<&str> = split_blocks("a<p>b", "").collect();
        assert_eq!(blocks, vec!["a<p>b"]);
    }

    #[test]
    fn test_clone_restarts_sequence() {
        let mut blocks = split_blocks("<p>a<p>b<p>c", "<p>");
        blocks.next();
        let saved = blocks.clone();

        let first: Vec<&str> = blocks.collect();
        let second: Vec<&str> = saved.collect();
        assert_eq!(first, second);
        assert_eq!(first, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let mut blocks = split_blocks("x", "<p>");
        assert_eq!(blocks.next(), Some("x"));
        assert_eq!(blocks.next(), None);
        assert_eq!(blocks.next(), None);
    }
}
