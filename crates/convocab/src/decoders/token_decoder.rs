//! # Token Decoder Trait

use crate::{errors::CVResult, types::TokenType};

/// Trait for token decoders.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decodes one token into its word.
    ///
    /// ## Arguments
    /// * `token` - The token to decode.
    ///
    /// ## Returns
    /// The word; or [`crate::ConvocabError::InvalidId`].
    fn try_decode_word(
        &self,
        token: T,
    ) -> CVResult<&str>;

    /// Decodes tokens into words.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    ///
    /// ## Returns
    /// The words; or the error for the first invalid token.
    fn try_decode_to_words(
        &self,
        tokens: &[T],
    ) -> CVResult<Vec<&str>> {
        tokens
            .iter()
            .map(|&token| self.try_decode_word(token))
            .collect()
    }

    /// Decodes tokens into a string, joining words with single spaces.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    fn try_decode_to_string(
        &self,
        tokens: &[T],
    ) -> CVResult<String> {
        Ok(self.try_decode_to_words(tokens)?.join(" "))
    }

    /// Decodes a batch of tokens into strings.
    ///
    /// ## Arguments
    /// * `batch` - A batch of tokens.
    fn try_decode_batch_to_strings(
        &self,
        batch: &[&[T]],
    ) -> CVResult<Vec<String>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_string(tokens))
            .collect()
    }
}
