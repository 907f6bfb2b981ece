//! # Token Encoders
//!
//! Encoders map sentences to token ids.
//! Words missing from the vocabulary encode as the reserved
//! unknown id, [`crate::vocab::specials::UNK_ID`].

mod token_encoder;
mod word_encoder;

#[doc(inline)]
pub use token_encoder::TokenEncoder;
#[doc(inline)]
pub use word_encoder::{WordEncoder, words_to_token_ids};
