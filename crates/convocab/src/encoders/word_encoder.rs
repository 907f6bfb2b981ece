//! # Word Encoder

use std::sync::Arc;

use crate::{
    encoders::TokenEncoder,
    spanning::split_words,
    types::TokenType,
    vocab::{ReservedSymbol, WordIndexMap, WordVocab},
};

/// Convert a sentence to token ids with a ``{ word -> T }`` index.
///
/// Words absent from `index` map to the unknown id.
///
/// ## Arguments
/// * `sentence` - The sentence; split on whitespace.
/// * `index` - The forward vocabulary index.
pub fn words_to_token_ids<T: TokenType>(
    sentence: &str,
    index: &WordIndexMap<T>,
) -> Vec<T> {
    let unk: T = ReservedSymbol::Unk.token();
    split_words(sentence)
        .map(|word| index.get(word).copied().unwrap_or(unk))
        .collect()
}

/// [`TokenEncoder`] over a shared [`WordVocab`].
#[derive(Debug, Clone)]
pub struct WordEncoder<T: TokenType> {
    vocab: Arc<WordVocab<T>>,
    unk_token: T,
}

impl<T: TokenType> WordEncoder<T> {
    /// Create a new encoder.
    pub fn new(vocab: Arc<WordVocab<T>>) -> Self {
        let unk_token = vocab.reserved_token(ReservedSymbol::Unk);
        Self { vocab, unk_token }
    }

    /// The vocabulary.
    pub fn vocab(&self) -> &Arc<WordVocab<T>> {
        &self.vocab
    }

    /// Encode one word.
    pub fn encode_word(
        &self,
        word: &str,
    ) -> T {
        self.vocab.lookup_token(word).unwrap_or(self.unk_token)
    }
}

impl<T: TokenType> TokenEncoder<T> for WordEncoder<T> {
    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) {
        tokens.extend(split_words(text).map(|word| self.encode_word(word)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::specials::UNK_ID;

    fn sample_encoder() -> WordEncoder<u32> {
        let vocab = WordVocab::from_words([
            "_PAD", "_GO", "_EOS", "_UNK", "hi", "there", "how", "are", "you", "fine", "thanks",
        ])
        .unwrap();
        WordEncoder::new(Arc::new(vocab))
    }

    #[test]
    fn test_encode() {
        let encoder = sample_encoder();
        assert_eq!(encoder.encode("hi fine"), vec![4, 9]);
        assert_eq!(encoder.encode("  how   are you "), vec![6, 7, 8]);
    }

    #[test]
    fn test_unknown_words() {
        let encoder = sample_encoder();
        assert_eq!(encoder.encode("zzz_never_seen"), vec![UNK_ID as u32]);
        assert_eq!(encoder.encode("Hi there"), vec![3, 5]);
    }

    #[test]
    fn test_empty_sentence() {
        let encoder = sample_encoder();
        assert!(encoder.encode("").is_empty());
        assert!(encoder.encode(" \t ").is_empty());
    }

    #[test]
    fn test_encode_append_and_batch() {
        let encoder = sample_encoder();

        let mut tokens = vec![1u32];
        encoder.encode_append("thanks", &mut tokens);
        assert_eq!(tokens, vec![1, 10]);

        assert_eq!(
            encoder.encode_batch(&["hi", "", "you there"]),
            vec![vec![4], vec![], vec![8, 5]]
        );
    }

    #[test]
    fn test_words_to_token_ids() {
        let encoder = sample_encoder();
        let index = encoder.vocab().index();
        assert_eq!(words_to_token_ids("hi nope", index), vec![4u32, 3]);
    }
}
