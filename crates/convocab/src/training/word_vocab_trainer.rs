//! # Word Vocab Trainer

use core::cmp::Ordering;
use std::io::BufRead;

use crate::{
    corpus::CorpusOptions,
    errors::CVResult,
    training::{CountType, CoverageReport, StringChunkType, WordCountMap, WordCounter},
    types::TokenType,
    vocab::{
        WordVocab,
        specials::{RESERVED_COUNT, RESERVED_WORDS, is_reserved_word},
    },
};

/// Options for [`WordVocabTrainer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordVocabTrainerOptions {
    /// The maximum vocabulary size, including the reserved symbols.
    ///
    /// `0` means unbounded.
    pub max_vocab_size: usize,

    /// The corpus reading options.
    pub corpus: CorpusOptions,
}

impl WordVocabTrainerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `max_vocab_size` - The maximum vocabulary size; `0` for unbounded.
    pub fn new(max_vocab_size: usize) -> Self {
        Self {
            max_vocab_size,
            ..Default::default()
        }
    }

    /// Sets the maximum vocabulary size.
    ///
    /// Sizes below the reserved symbol count truncate the reserved symbols too.
    pub fn with_max_vocab_size(
        self,
        max_vocab_size: usize,
    ) -> Self {
        Self {
            max_vocab_size,
            ..self
        }
    }

    /// Sets the corpus reading options.
    pub fn with_corpus_options(
        self,
        corpus: CorpusOptions,
    ) -> Self {
        Self { corpus, ..self }
    }

    /// Initializes a [`WordVocabTrainer`] from these options.
    pub fn init<K, C>(self) -> WordVocabTrainer<K, C>
    where
        K: StringChunkType,
        C: CountType,
    {
        WordVocabTrainer::new(self)
    }
}

/// Rank the counted words.
///
/// Descending count; ties break to ascending word order (deterministic).
pub fn rank_words<K, C>(counts: &WordCountMap<K, C>) -> Vec<(&K, C)>
where
    K: StringChunkType,
    C: CountType,
{
    let mut ranked: Vec<(&K, C)> = counts.iter().map(|(k, &c)| (k, c)).collect();
    ranked.sort_unstable_by(|a, b| rank_order(a, b));
    ranked
}

fn rank_order<K, C>(
    a: &(&K, C),
    b: &(&K, C),
) -> Ordering
where
    K: StringChunkType,
    C: CountType,
{
    b.1.cmp(&a.1)
        .then_with(|| a.0.as_ref().cmp(b.0.as_ref()))
}

/// Build the ordered vocabulary word list from word counts.
///
/// The list is the reserved symbols followed by the ranked corpus words,
/// truncated to `max_vocab_size` entries when that is non-zero.
///
/// Corpus words equal to a reserved symbol are folded into the reserved
/// entry rather than listed twice.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(counts)))]
pub fn build_word_list<K, C>(
    counts: &WordCountMap<K, C>,
    max_vocab_size: usize,
) -> Vec<String>
where
    K: StringChunkType,
    C: CountType,
{
    let ranked = rank_words(counts);
    log::info!(
        "Ranked {} distinct words; vocab length {}",
        ranked.len(),
        RESERVED_COUNT + ranked.len()
    );

    let capacity = match max_vocab_size {
        0 => RESERVED_COUNT + ranked.len(),
        max => max.min(RESERVED_COUNT + ranked.len()),
    };
    let mut words: Vec<String> = Vec::with_capacity(capacity);
    words.extend(RESERVED_WORDS.iter().map(|w| w.to_string()));

    for (word, count) in ranked {
        if max_vocab_size > 0 && words.len() >= max_vocab_size {
            break;
        }
        let word = word.as_ref();
        if is_reserved_word(word) {
            log::warn!("Corpus word {word:?} ({count} occurrences) collides with a reserved symbol");
            continue;
        }
        words.push(word.to_string());
    }

    if max_vocab_size > 0 && words.len() > max_vocab_size {
        words.truncate(max_vocab_size);
    }

    log::info!("Built word list of {} entries", words.len());
    words
}

/// Word vocabulary trainer.
///
/// Counts corpus words, then ranks and truncates them into a [`WordVocab`].
#[derive(Debug, Clone)]
pub struct WordVocabTrainer<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    /// Trainer options.
    pub options: WordVocabTrainerOptions,

    /// The word counter.
    pub counter: WordCounter<K, C>,
}

impl<K, C> WordVocabTrainer<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    /// Initializes a [`WordVocabTrainer`].
    pub fn new(options: WordVocabTrainerOptions) -> Self {
        let counter = WordCounter::new(options.corpus.clone());
        Self { options, counter }
    }

    /// Update word counts inplace from corpus lines.
    ///
    /// See [`WordCounter::update_from_lines`].
    pub fn update_from_lines<I, F>(
        &mut self,
        lines: I,
        progress: F,
    ) -> CVResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        F: FnMut(usize),
    {
        self.counter.update_from_lines(lines, progress)
    }

    /// Update word counts inplace from a corpus reader.
    ///
    /// See [`WordCounter::update_from_reader`].
    pub fn update_from_reader<R, F>(
        &mut self,
        reader: R,
        progress: F,
    ) -> CVResult<()>
    where
        R: BufRead,
        F: FnMut(usize),
    {
        self.counter.update_from_reader(reader, progress)
    }

    /// The word counts so far.
    pub fn word_counts(&self) -> &WordCountMap<K, C> {
        &self.counter.word_counts
    }

    /// Report corpus coverage at the given vocabulary sizes.
    pub fn coverage(
        &self,
        top_ns: &[usize],
    ) -> CoverageReport {
        CoverageReport::from_counts(self.word_counts(), top_ns)
    }

    /// Build the vocabulary word list.
    ///
    /// See [`build_word_list`].
    pub fn train_words(self) -> Vec<String> {
        log::info!(
            "Counted {} records, {} distinct words",
            self.counter.records(),
            self.counter.distinct_words()
        );
        build_word_list(&self.counter.word_counts, self.options.max_vocab_size)
    }

    /// Trains a [`WordVocab<T>`].
    ///
    /// ## Returns
    /// The vocabulary; or [`crate::ConvocabError::VocabSizeOverflow`] if it
    /// does not fit in `T`.
    pub fn train<T: TokenType>(self) -> CVResult<WordVocab<T>> {
        WordVocab::from_words(self.train_words())
    }
}
