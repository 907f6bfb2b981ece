//! # Token Decoders
//!
//! Decoders map token ids back to words. An id outside the
//! vocabulary is an error, [`crate::ConvocabError::InvalidId`].

mod token_decoder;
mod word_decoder;

#[doc(inline)]
pub use token_decoder::TokenDecoder;
#[doc(inline)]
pub use word_decoder::WordDecoder;
