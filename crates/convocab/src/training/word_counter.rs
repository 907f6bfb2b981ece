//! # Word Counter

use std::io::BufRead;

use crate::{
    corpus::{CorpusOptions, DialogRecord, read_corpus_lines},
    errors::CVResult,
    training::{CountType, StringChunkType},
    types::{CVHashMap, hash_map_with_capacity},
};

/// Map of ``{ word -> count }``.
pub type WordCountMap<K, C> = CVHashMap<K, C>;

/// Streaming word frequency counter over dialogue records.
///
/// Counts only ever grow; no entry is removed.
#[derive(Debug, Clone)]
pub struct WordCounter<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    /// The corpus options.
    pub options: CorpusOptions,

    /// The word counts.
    pub word_counts: WordCountMap<K, C>,

    records: usize,
}

impl<K, C> WordCounter<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    /// Create a new word counter.
    pub fn new(options: CorpusOptions) -> Self {
        Self {
            options,
            word_counts: hash_map_with_capacity(100_000),
            records: 0,
        }
    }

    /// The number of records counted so far.
    pub fn records(&self) -> usize {
        self.records
    }

    /// The number of distinct words counted so far.
    pub fn distinct_words(&self) -> usize {
        self.word_counts.len()
    }

    /// Release the word counts and return them.
    pub fn release(self) -> WordCountMap<K, C> {
        self.word_counts
    }

    /// Update word counts inplace from free text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        for word in crate::spanning::split_words(text.as_ref()) {
            self.add_word(word);
        }
    }

    /// Update word counts inplace from one record.
    pub fn update_from_record(
        &mut self,
        record: &DialogRecord<'_>,
    ) {
        for word in record.words() {
            self.add_word(word);
        }
    }

    /// Update word counts inplace from corpus lines.
    ///
    /// Each line must be a well-formed record. A malformed line aborts the
    /// pass with [`crate::ConvocabError::MalformedRecord`] before any of its
    /// words are counted; the counter should then be discarded.
    ///
    /// ## Arguments
    /// * `lines` - the corpus lines.
    /// * `progress` - called with the running record count every
    ///   [`CorpusOptions::progress_interval`] records.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, lines, progress)))]
    pub fn update_from_lines<I, F>(
        &mut self,
        lines: I,
        mut progress: F,
    ) -> CVResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        F: FnMut(usize),
    {
        for line in lines {
            self.update_from_line(line.as_ref(), &mut progress)?;
        }
        Ok(())
    }

    /// Update word counts inplace from a corpus reader.
    ///
    /// The reader is streamed line by line. See [`WordCounter::update_from_lines`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, reader, progress)))]
    pub fn update_from_reader<R, F>(
        &mut self,
        reader: R,
        mut progress: F,
    ) -> CVResult<()>
    where
        R: BufRead,
        F: FnMut(usize),
    {
        for line in read_corpus_lines(reader) {
            self.update_from_line(&line?, &mut progress)?;
        }
        Ok(())
    }

    fn update_from_line<F>(
        &mut self,
        line: &str,
        progress: &mut F,
    ) -> CVResult<()>
    where
        F: FnMut(usize),
    {
        let line_number = self.records + 1;
        let record = DialogRecord::parse(line, self.options.delimiter, line_number)?;

        self.records = line_number;
        self.update_from_record(&record);

        if self.options.is_progress_point(self.records) {
            progress(self.records);
        }
        Ok(())
    }

    fn add_word(
        &mut self,
        word: &str,
    ) {
        *self.word_counts.entry(word.into()).or_default() += C::one();
    }
}

/// Count the words of a corpus.
///
/// ## Arguments
/// * `lines` - the corpus lines.
/// * `options` - the corpus options.
/// * `progress` - the progress callback; see [`WordCounter::update_from_lines`].
///
/// ## Returns
/// The complete word counts; or the first error, with no partial counts.
pub fn count_corpus_lines<K, C, I, F>(
    lines: I,
    options: &CorpusOptions,
    progress: F,
) -> CVResult<WordCountMap<K, C>>
where
    K: StringChunkType,
    C: CountType,
    I: IntoIterator,
    I::Item: AsRef<str>,
    F: FnMut(usize),
{
    let mut counter = WordCounter::<K, C>::new(options.clone());
    counter.update_from_lines(lines, progress)?;
    Ok(counter.release())
}
