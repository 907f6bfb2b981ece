//! # Dialogue Record

use crate::{
    errors::{CVResult, ConvocabError},
    spanning::split_words,
};

/// The number of turns in a well-formed record.
pub const RECORD_FIELD_COUNT: usize = 3;

/// One corpus line: three conversational turns.
///
/// Each turn is trimmed of surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogRecord<'a> {
    turns: [&'a str; RECORD_FIELD_COUNT],
}

impl<'a> DialogRecord<'a> {
    /// Build a record from three turns.
    pub fn new(turns: [&'a str; RECORD_FIELD_COUNT]) -> Self {
        Self {
            turns: turns.map(str::trim),
        }
    }

    /// Parse a corpus line.
    ///
    /// ## Arguments
    /// * `line` - the raw line; a trailing ``\n`` or ``\r\n`` is ignored.
    /// * `delimiter` - the field delimiter.
    /// * `line_number` - the 1-based line number, used for error reporting.
    ///
    /// ## Returns
    /// The record, or [`ConvocabError::MalformedRecord`] if the line does not
    /// split into exactly [`RECORD_FIELD_COUNT`] fields.
    pub fn parse(
        line: &'a str,
        delimiter: char,
        line_number: usize,
    ) -> CVResult<Self> {
        let line = line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(line);

        let mut turns = [""; RECORD_FIELD_COUNT];
        let mut fields = 0;
        for field in line.split(delimiter) {
            if fields < RECORD_FIELD_COUNT {
                turns[fields] = field;
            }
            fields += 1;
        }

        if fields != RECORD_FIELD_COUNT {
            return Err(ConvocabError::MalformedRecord {
                line: line_number,
                fields,
            });
        }

        Ok(Self::new(turns))
    }

    /// The trimmed turns.
    pub fn turns(&self) -> &[&'a str; RECORD_FIELD_COUNT] {
        &self.turns
    }

    /// The turns joined with single spaces into one logical line.
    pub fn joined(&self) -> String {
        self.turns.join(" ")
    }

    /// The words of the joined line.
    ///
    /// Equivalent to splitting [`DialogRecord::joined`], without allocating.
    pub fn words(&self) -> impl Iterator<Item = &'a str> {
        self.turns.into_iter().flat_map(split_words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_triplet() {
        let record = DialogRecord::parse("hi there\thow are you\tfine thanks\n", '\t', 1).unwrap();
        assert_eq!(record.turns(), &["hi there", "how are you", "fine thanks"]);
        assert_eq!(record.joined(), "hi there how are you fine thanks");
        assert_eq!(
            record.words().collect::<Vec<_>>(),
            vec!["hi", "there", "how", "are", "you", "fine", "thanks"]
        );
    }

    #[test]
    fn test_turns_are_trimmed() {
        let record = DialogRecord::parse("  a b \t c\t d  \r\n", '\t', 1).unwrap();
        assert_eq!(record.turns(), &["a b", "c", "d"]);
        assert_eq!(record.joined(), "a b c d");
    }

    #[test]
    fn test_empty_turns_are_allowed() {
        let record = DialogRecord::parse("a\t\tc", '\t', 1).unwrap();
        assert_eq!(record.joined(), "a  c");
        assert_eq!(record.words().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn test_too_few_fields() {
        let err = DialogRecord::parse("only\ttwo fields", '\t', 4).unwrap_err();
        assert!(matches!(
            err,
            ConvocabError::MalformedRecord { line: 4, fields: 2 }
        ));

        let err = DialogRecord::parse("", '\t', 9).unwrap_err();
        assert!(matches!(
            err,
            ConvocabError::MalformedRecord { line: 9, fields: 1 }
        ));
    }

    #[test]
    fn test_too_many_fields() {
        let err = DialogRecord::parse("a\tb\tc\td", '\t', 2).unwrap_err();
        assert!(matches!(
            err,
            ConvocabError::MalformedRecord { line: 2, fields: 4 }
        ));
    }

    #[test]
    fn test_custom_delimiter() {
        let record = DialogRecord::parse("a|b|c d", '|', 1).unwrap();
        assert_eq!(record.joined(), "a b c d");
    }
}
