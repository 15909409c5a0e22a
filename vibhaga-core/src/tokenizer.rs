//! Sentence tokenizer
//!
//! Splits free text on space, period and comma, keeping every delimiter as its
//! own piece. Empty runs between adjacent delimiters are dropped.

use regex::Regex;
use std::sync::OnceLock;

/// Characters that separate words in sentence mode
pub const DELIMITERS: [char; 3] = [' ', '.', ','];

static DELIMITER_PATTERN: OnceLock<Regex> = OnceLock::new();

fn delimiter_pattern() -> &'static Regex {
    DELIMITER_PATTERN.get_or_init(|| Regex::new(r"[ .,]").expect("delimiter pattern is valid"))
}

/// A piece of tokenized text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Text to analyse as a word
    Word(&'a str),
    /// Delimiter to copy through
    Delimiter(char),
}

/// Whether `text` contains any sentence delimiter
pub fn has_delimiter(text: &str) -> bool {
    text.contains(DELIMITERS)
}

/// Split `text` into words and delimiters, in order
pub fn tokenize(text: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut last = 0;

    for found in delimiter_pattern().find_iter(text) {
        if found.start() > last {
            pieces.push(Piece::Word(&text[last..found.start()]));
        }
        if let Some(delimiter) = found.as_str().chars().next() {
            pieces.push(Piece::Delimiter(delimiter));
        }
        last = found.end();
    }

    if last < text.len() {
        pieces.push(Piece::Word(&text[last..]));
    }

    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_sentence() {
        assert_eq!(
            tokenize("play it."),
            vec![
                Piece::Word("play"),
                Piece::Delimiter(' '),
                Piece::Word("it"),
                Piece::Delimiter('.'),
            ]
        );
    }

    #[test]
    fn test_adjacent_delimiters_drop_empty_words() {
        assert_eq!(
            tokenize("a, b"),
            vec![
                Piece::Word("a"),
                Piece::Delimiter(','),
                Piece::Delimiter(' '),
                Piece::Word("b"),
            ]
        );
    }

    #[test]
    fn test_leading_and_trailing_delimiters() {
        assert_eq!(
            tokenize(" x "),
            vec![Piece::Delimiter(' '), Piece::Word("x"), Piece::Delimiter(' ')]
        );
    }

    #[test]
    fn test_other_whitespace_is_not_a_delimiter() {
        assert_eq!(
            tokenize("a\tb c"),
            vec![Piece::Word("a\tb"), Piece::Delimiter(' '), Piece::Word("c")]
        );
    }

    #[test]
    fn test_no_delimiters() {
        assert_eq!(tokenize("word"), vec![Piece::Word("word")]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_multibyte_words() {
        assert_eq!(
            tokenize("ఇది ఒక."),
            vec![
                Piece::Word("ఇది"),
                Piece::Delimiter(' '),
                Piece::Word("ఒక"),
                Piece::Delimiter('.'),
            ]
        );
    }

    #[test]
    fn test_has_delimiter() {
        assert!(has_delimiter("a b"));
        assert!(has_delimiter("e.g"));
        assert!(has_delimiter("a,b"));
        assert!(!has_delimiter("word"));
        assert!(!has_delimiter("tab\tseparated"));
    }
}
