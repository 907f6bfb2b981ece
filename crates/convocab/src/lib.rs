//! # `convocab` Conversational Vocabulary Suite
//!
//! This crate builds a fixed-size word vocabulary from a corpus of
//! dialogue triplets, persists it as a flat word list, and maps text
//! to and from integer token ids for a downstream sequence-model trainer.
//!
//! See:
//! * [`training`] to count corpus words and rank them into a [`vocab::WordVocab`].
//! * [`vocab`] for the reserved symbols, the vocabulary table, and vocab io.
//! * [`encoders`] to encode sentences into token ids.
//! * [`decoders`] to decode token ids back into words.
//!
//! ## Corpus Format
//!
//! One record per line; each record is three conversational turns joined
//! by a tab:
//!
//! ```text
//! hi there<TAB>how are you<TAB>fine thanks
//! ```
//!
//! ## Building and Using a Vocabulary
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use convocab::{
//!     TokenDecoder,
//!     TokenEncoder,
//!     decoders::WordDecoder,
//!     encoders::WordEncoder,
//!     training::WordVocabTrainerOptions,
//!     vocab::{
//!         WordVocab,
//!         io::{create_word_vocab_if_absent, load_word_vocab_path},
//!     },
//! };
//!
//! fn example() -> convocab::CVResult<()> {
//!     let options = WordVocabTrainerOptions::default().with_max_vocab_size(40_000);
//!     create_word_vocab_if_absent("vocab.txt", "corpus.tsv", &options)?;
//!
//!     let vocab: Arc<WordVocab<u32>> = Arc::new(load_word_vocab_path("vocab.txt")?);
//!
//!     let encoder = WordEncoder::new(vocab.clone());
//!     let decoder = WordDecoder::new(vocab);
//!
//!     let ids = encoder.encode("hi there");
//!     let text = decoder.try_decode_to_string(&ids)?;
//!     println!("{ids:?} -> {text}");
//!     Ok(())
//! }
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

pub mod corpus;
pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod spanning;
pub mod training;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use decoders::TokenDecoder;
#[doc(inline)]
pub use encoders::TokenEncoder;
#[doc(inline)]
pub use errors::{CVResult, ConvocabError};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::WordVocab;
