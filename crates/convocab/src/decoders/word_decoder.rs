//! # Word Decoder

use std::sync::Arc;

use crate::{decoders::TokenDecoder, errors::CVResult, types::TokenType, vocab::WordVocab};

/// [`TokenDecoder`] over a shared [`WordVocab`].
///
/// Decoding is a direct index into the vocabulary word list.
#[derive(Debug, Clone)]
pub struct WordDecoder<T: TokenType> {
    vocab: Arc<WordVocab<T>>,
}

impl<T: TokenType> WordDecoder<T> {
    /// Create a new decoder.
    pub fn new(vocab: Arc<WordVocab<T>>) -> Self {
        Self { vocab }
    }

    /// The vocabulary.
    pub fn vocab(&self) -> &Arc<WordVocab<T>> {
        &self.vocab
    }
}

impl<T: TokenType> TokenDecoder<T> for WordDecoder<T> {
    fn try_decode_word(
        &self,
        token: T,
    ) -> CVResult<&str> {
        self.vocab.lookup_word(token)
    }
}
