//! # Corpus Options

/// The default field delimiter between dialogue turns.
pub const DEFAULT_FIELD_DELIMITER: char = '\t';

/// The default number of records between progress callbacks.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 100_000;

/// Options controlling how a corpus is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusOptions {
    /// The delimiter between the turns of a record.
    pub delimiter: char,

    /// The number of records between progress callbacks; `0` disables them.
    pub progress_interval: usize,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_FIELD_DELIMITER,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl CorpusOptions {
    /// Set the field delimiter.
    pub fn with_delimiter(
        self,
        delimiter: char,
    ) -> Self {
        Self { delimiter, ..self }
    }

    /// Set the progress interval; `0` disables progress callbacks.
    pub fn with_progress_interval(
        self,
        progress_interval: usize,
    ) -> Self {
        Self {
            progress_interval,
            ..self
        }
    }

    /// Should progress be reported after `records` records?
    pub fn is_progress_point(
        &self,
        records: usize,
    ) -> bool {
        self.progress_interval > 0 && records > 0 && records % self.progress_interval == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CorpusOptions::default();
        assert_eq!(options.delimiter, '\t');
        assert_eq!(options.progress_interval, 100_000);
    }

    #[test]
    fn test_setters() {
        let options = CorpusOptions::default()
            .with_delimiter('|')
            .with_progress_interval(10);
        assert_eq!(options.delimiter, '|');
        assert_eq!(options.progress_interval, 10);
    }

    #[test]
    fn test_progress_points() {
        let options = CorpusOptions::default().with_progress_interval(3);
        assert!(!options.is_progress_point(0));
        assert!(!options.is_progress_point(2));
        assert!(options.is_progress_point(3));
        assert!(options.is_progress_point(6));

        let disabled = options.with_progress_interval(0);
        assert!(!disabled.is_progress_point(3));
    }
}
