//! # Vocabulary IO
//!
//! Vocabularies are stored as flat UTF-8 text, one word per line,
//! in id order; line 0 is id 0. There is no header or other metadata.
//!
//! ## Building Once, Loading Later
//!
//! ```rust,no_run
//! use convocab::{
//!     training::WordVocabTrainerOptions,
//!     vocab::{
//!         WordVocab,
//!         io::{VocabFileStatus, create_word_vocab_if_absent, load_word_vocab_path},
//!     },
//! };
//!
//! fn example() -> convocab::CVResult<WordVocab<u32>> {
//!     let options = WordVocabTrainerOptions::default().with_max_vocab_size(20_000);
//!
//!     match create_word_vocab_if_absent("data/vocab.txt", "data/train.tsv", &options)? {
//!         VocabFileStatus::Created { size } => println!("created {size} words"),
//!         VocabFileStatus::Existing => println!("reusing existing vocabulary"),
//!     }
//!
//!     load_word_vocab_path("data/vocab.txt")
//! }
//! ```

mod word_list_io;

#[doc(inline)]
pub use word_list_io::*;
