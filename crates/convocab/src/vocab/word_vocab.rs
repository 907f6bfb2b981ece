//! # Word Vocabulary

use crate::{
    errors::{CVResult, ConvocabError},
    types::{CVHashMap, TokenType, hash_map_with_capacity, token_from_index},
    vocab::specials::{RESERVED_COUNT, RESERVED_WORDS, ReservedSymbol},
};

/// Map of ``{ word -> T }``.
pub type WordIndexMap<T> = CVHashMap<String, T>;

/// An ordered word vocabulary.
///
/// Holds both directions of the mapping:
/// * the reverse table, ``{ T -> word }``, as the word list itself;
/// * the forward index, ``{ word -> T }``.
///
/// If the word list contains a word more than once, every position keeps its
/// id in the reverse table, and the forward index resolves to the first one.
#[derive(Debug, Clone, PartialEq)]
pub struct WordVocab<T: TokenType> {
    words: Vec<String>,
    index: WordIndexMap<T>,
}

impl<T: TokenType> WordVocab<T> {
    /// Build a vocabulary from an ordered word list.
    ///
    /// ## Arguments
    /// * `words` - the words, in id order.
    ///
    /// ## Returns
    /// The vocabulary; or [`ConvocabError::VocabSizeOverflow`] if the
    /// largest id does not fit in `T`.
    pub fn from_words<I, S>(words: I) -> CVResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();

        let size = words.len();
        if size > 0 && token_from_index::<T>(size - 1).is_none() {
            return Err(ConvocabError::VocabSizeOverflow { size });
        }

        let mut index: WordIndexMap<T> = hash_map_with_capacity(size);
        for (idx, word) in words.iter().enumerate() {
            if let Some(token) = token_from_index::<T>(idx) {
                index.entry(word.clone()).or_insert(token);
            }
        }

        Ok(Self { words, index })
    }

    /// The number of entries in the vocabulary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The reverse table: words in id order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The forward index: ``{ word -> T }``.
    pub fn index(&self) -> &WordIndexMap<T> {
        &self.index
    }

    /// Split into the forward index and the reverse table.
    pub fn into_parts(self) -> (WordIndexMap<T>, Vec<String>) {
        (self.index, self.words)
    }

    /// Does the vocabulary contain `word`?
    pub fn contains(
        &self,
        word: &str,
    ) -> bool {
        self.index.contains_key(word)
    }

    /// Look up the token id of a word.
    pub fn lookup_token(
        &self,
        word: &str,
    ) -> Option<T> {
        self.index.get(word).copied()
    }

    /// Look up the word for a token id.
    ///
    /// ## Returns
    /// The word; or [`ConvocabError::InvalidId`] if `token` is not
    /// in ``[0, len)``.
    pub fn lookup_word(
        &self,
        token: T,
    ) -> CVResult<&str> {
        let id = token.to_usize().unwrap_or(usize::MAX);
        self.words
            .get(id)
            .map(String::as_str)
            .ok_or(ConvocabError::InvalidId {
                id,
                len: self.len(),
            })
    }

    /// The id of a reserved symbol.
    pub fn reserved_token(
        &self,
        symbol: ReservedSymbol,
    ) -> T {
        symbol.token()
    }

    /// Does the vocabulary start with the reserved symbols, in order?
    ///
    /// Loading is positional and does not check this; vocabularies
    /// from other sources may not follow the layout.
    pub fn has_reserved_layout(&self) -> bool {
        self.words.len() >= RESERVED_COUNT
            && self
                .words
                .iter()
                .zip(RESERVED_WORDS)
                .all(|(word, reserved)| word == reserved)
    }

    /// Iterate over ``(T, word)`` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &str)> {
        self.words
            .iter()
            .enumerate()
            .filter_map(|(idx, word)| token_from_index::<T>(idx).map(|t| (t, word.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vocab() -> WordVocab<u32> {
        WordVocab::from_words(["_PAD", "_GO", "_EOS", "_UNK", "hello", "world"]).unwrap()
    }

    #[test]
    fn test_forward_and_reverse() {
        let vocab = sample_vocab();
        assert_eq!(vocab.len(), 6);
        assert!(!vocab.is_empty());

        for (idx, word) in vocab.words().iter().enumerate() {
            assert_eq!(vocab.lookup_token(word), Some(idx as u32));
            assert_eq!(vocab.lookup_word(idx as u32).unwrap(), word.as_str());
        }

        assert_eq!(vocab.lookup_token("missing"), None);
        assert!(vocab.contains("hello"));
        assert!(!vocab.contains("Hello"));
    }

    #[test]
    fn test_lookup_word_out_of_range() {
        let vocab = sample_vocab();
        let err = vocab.lookup_word(6).unwrap_err();
        assert!(matches!(err, ConvocabError::InvalidId { id: 6, len: 6 }));
    }

    #[test]
    fn test_into_parts() {
        let (forward, reverse) = sample_vocab().into_parts();
        assert_eq!(reverse.len(), 6);
        assert_eq!(forward.len(), 6);
        assert_eq!(forward["world"], 5);
        assert_eq!(reverse[4], "hello");
    }

    #[test]
    fn test_duplicate_words_keep_first_id() {
        let vocab: WordVocab<u32> = WordVocab::from_words(["a", "b", "a"]).unwrap();
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.lookup_token("a"), Some(0));
        assert_eq!(vocab.lookup_word(2).unwrap(), "a");
    }

    #[test]
    fn test_reserved_layout() {
        let vocab = sample_vocab();
        assert!(vocab.has_reserved_layout());
        assert_eq!(vocab.reserved_token(ReservedSymbol::Unk), 3);

        let plain: WordVocab<u32> = WordVocab::from_words(["dog", "cat"]).unwrap();
        assert!(!plain.has_reserved_layout());
    }

    #[test]
    fn test_size_overflow() {
        let words: Vec<String> = (0..257).map(|i| format!("w{i}")).collect();
        let err = WordVocab::<u8>::from_words(words.clone()).unwrap_err();
        assert!(matches!(err, ConvocabError::VocabSizeOverflow { size: 257 }));

        let vocab = WordVocab::<u8>::from_words(words.into_iter().take(256)).unwrap();
        assert_eq!(vocab.lookup_token("w255"), Some(255u8));
    }

    #[test]
    fn test_iter() {
        let vocab: WordVocab<u16> = WordVocab::from_words(["x", "y"]).unwrap();
        assert_eq!(vocab.iter().collect::<Vec<_>>(), vec![(0u16, "x"), (1u16, "y")]);
    }
}
