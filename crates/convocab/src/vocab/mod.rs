//! # Vocabulary
//!
//! This module provides the word vocabulary and related io mechanisms.
//!
//! ## Layout
//!
//! A [`WordVocab`] is an ordered list of distinct words; a word's token id
//! is its position in the list. The first four positions hold the
//! [`specials`] reserved symbols, followed by corpus words in rank order:
//!
//! ```text
//! 0: _PAD
//! 1: _GO
//! 2: _EOS
//! 3: _UNK
//! 4: <most frequent corpus word>
//! ...
//! ```
//!
//! ## Persistence
//!
//! See [`io`] for the one-word-per-line file format, and for
//! [`io::create_word_vocab_if_absent`], which builds a vocabulary
//! from a corpus only when the target file does not exist yet.

pub mod io;
pub mod specials;

mod word_vocab;

#[doc(inline)]
pub use specials::ReservedSymbol;
#[doc(inline)]
pub use word_vocab::{WordIndexMap, WordVocab};
