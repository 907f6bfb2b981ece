//! # Token Encoder Trait

use crate::types::TokenType;

/// Trait for token encoders.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Encodes a sentence, appending its tokens to `tokens`.
    ///
    /// ## Arguments
    /// * `text` - The sentence to encode.
    /// * `tokens` - The target token buffer.
    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    );

    /// Encodes a sentence into tokens.
    ///
    /// ## Arguments
    /// * `text` - The sentence to encode.
    ///
    /// ## Returns
    /// The token ids; empty for an empty sentence.
    fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        let mut tokens = Vec::new();
        self.encode_append(text, &mut tokens);
        tokens
    }

    /// Encodes a batch of sentences.
    ///
    /// ## Arguments
    /// * `batch` - The sentences to encode.
    ///
    /// ## Returns
    /// The token ids of each sentence, in batch order.
    fn encode_batch(
        &self,
        batch: &[&str],
    ) -> Vec<Vec<T>> {
        batch.iter().map(|text| self.encode(text)).collect()
    }
}
