//! # Word Spanning
//!
//! Words are maximal runs of non-whitespace characters.
//! No normalization is applied: case, punctuation, and digits
//! are kept exactly as they appear in the text.

use core::str::SplitWhitespace;

/// Iterator over the words of a text.
pub type WordSpans<'a> = SplitWhitespace<'a>;

/// Split `text` into whitespace-delimited words.
///
/// Leading, trailing, and repeated whitespace never yields empty words;
/// empty or blank input yields no words.
pub fn split_words(text: &str) -> WordSpans<'_> {
    text.split_whitespace()
}

/// Count the words in `text` without allocating.
pub fn count_words(text: &str) -> usize {
    split_words(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        let words: Vec<&str> = split_words("  hello   world\tfoo\nbar ").collect();
        assert_eq!(words, vec!["hello", "world", "foo", "bar"]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(split_words("").count(), 0);
        assert_eq!(split_words(" \t \r\n").count(), 0);
    }

    #[test]
    fn test_no_normalization() {
        let words: Vec<&str> = split_words("Hello, WORLD 42 caf\u{00e9}!").collect();
        assert_eq!(words, vec!["Hello,", "WORLD", "42", "caf\u{00e9}!"]);
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("a b  c"), 3);
        assert_eq!(count_words(""), 0);
    }
}
