//! # Corpus Line Reader

use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
};

use crate::errors::CVResult;

/// Streaming iterator over the lines of a corpus.
///
/// Lines are read one at a time; the corpus is never held in memory.
pub struct CorpusLines<R: BufRead> {
    lines: Lines<R>,
}

impl<R: BufRead> Iterator for CorpusLines<R> {
    type Item = CVResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|line| line.map_err(Into::into))
    }
}

/// Stream the lines of a corpus reader.
pub fn read_corpus_lines<R: BufRead>(reader: R) -> CorpusLines<R> {
    CorpusLines {
        lines: reader.lines(),
    }
}

/// Open a corpus file for buffered streaming.
pub fn open_corpus_path<P: AsRef<Path>>(path: P) -> CVResult<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::errors::ConvocabError;

    #[test]
    fn test_read_corpus_lines() {
        let reader = Cursor::new("a\tb\tc\r\nd\te\tf\n");
        let lines: Vec<String> = read_corpus_lines(reader)
            .collect::<CVResult<Vec<_>>>()
            .unwrap();
        assert_eq!(lines, vec!["a\tb\tc", "d\te\tf"]);
    }

    #[test]
    fn test_open_missing_corpus() {
        let dir = tempdir::TempDir::new("corpus_test").unwrap();
        let err = open_corpus_path(dir.path().join("missing.tsv")).unwrap_err();
        assert!(matches!(err, ConvocabError::Io(_)));
    }
}
