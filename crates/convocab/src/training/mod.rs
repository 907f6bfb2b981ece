//! # Vocabulary Training
//!
//! Support for building word vocabularies from a dialogue corpus.
//!
//! Training is a single, single-threaded pass:
//! 1. [`WordCounter`] streams corpus records and counts every word of the
//!    three joined turns.
//! 2. [`rank_words`] orders the distinct words by descending count,
//!    breaking ties by ascending word order, so repeated builds from the
//!    same corpus produce identical ids.
//! 3. [`WordVocabTrainer::train`] prepends the reserved symbols and
//!    truncates to the configured maximum size.
//!
//! The word counts must fit in memory; the corpus itself is streamed.
//!
//! ```rust,no_run
//! use convocab::{
//!     corpus::open_corpus_path,
//!     training::WordVocabTrainerOptions,
//!     vocab::WordVocab,
//! };
//!
//! fn example() -> convocab::CVResult<WordVocab<u32>> {
//!     let options = WordVocabTrainerOptions::default().with_max_vocab_size(40_000);
//!
//!     type K = String;
//!     type C = u64;
//!     let mut trainer = options.init::<K, C>();
//!
//!     trainer.update_from_reader(open_corpus_path("train.tsv")?, |records| {
//!         log::info!("processing line {records}");
//!     })?;
//!
//!     trainer.train()
//! }
//! ```

mod coverage;
mod training_types;
mod word_counter;
mod word_vocab_trainer;

#[doc(inline)]
pub use coverage::{CoveragePoint, CoverageReport};
#[doc(inline)]
pub use training_types::{CountType, StringChunkType};
#[doc(inline)]
pub use word_counter::{WordCountMap, WordCounter, count_corpus_lines};
#[doc(inline)]
pub use word_vocab_trainer::{
    WordVocabTrainer,
    WordVocabTrainerOptions,
    build_word_list,
    rank_words,
};
