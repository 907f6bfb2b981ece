//! # Reserved Symbols
//!
//! Every vocabulary built by this crate starts with the same four
//! reserved symbols, at fixed ids.

use crate::types::TokenType;

/// Padding symbol.
pub const PAD_WORD: &str = "_PAD";
/// Decoder start symbol.
pub const GO_WORD: &str = "_GO";
/// End of sequence symbol.
pub const EOS_WORD: &str = "_EOS";
/// Unknown word symbol.
pub const UNK_WORD: &str = "_UNK";

/// Id of [`PAD_WORD`].
pub const PAD_ID: usize = 0;
/// Id of [`GO_WORD`].
pub const GO_ID: usize = 1;
/// Id of [`EOS_WORD`].
pub const EOS_ID: usize = 2;
/// Id of [`UNK_WORD`].
pub const UNK_ID: usize = 3;

/// The reserved words, in id order.
pub const RESERVED_WORDS: [&str; 4] = [PAD_WORD, GO_WORD, EOS_WORD, UNK_WORD];

/// The number of reserved symbols.
pub const RESERVED_COUNT: usize = RESERVED_WORDS.len();

/// A reserved vocabulary symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReservedSymbol {
    /// Padding.
    Pad,
    /// Decoder start.
    Go,
    /// End of sequence.
    Eos,
    /// Unknown word.
    Unk,
}

impl ReservedSymbol {
    /// All reserved symbols, in id order.
    pub const ALL: [ReservedSymbol; RESERVED_COUNT] = [
        ReservedSymbol::Pad,
        ReservedSymbol::Go,
        ReservedSymbol::Eos,
        ReservedSymbol::Unk,
    ];

    /// The fixed id of the symbol.
    pub const fn id(self) -> usize {
        match self {
            ReservedSymbol::Pad => PAD_ID,
            ReservedSymbol::Go => GO_ID,
            ReservedSymbol::Eos => EOS_ID,
            ReservedSymbol::Unk => UNK_ID,
        }
    }

    /// The surface word of the symbol.
    pub const fn word(self) -> &'static str {
        RESERVED_WORDS[self.id()]
    }

    /// The fixed id of the symbol, as a token.
    pub fn token<T: TokenType>(self) -> T {
        // Reserved ids are below 4; every unsigned primitive holds them.
        T::from_usize(self.id()).expect("reserved id fits token type")
    }

    /// Look up the reserved symbol with the given surface word.
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.word() == word)
    }
}

/// Is `word` one of the reserved symbol words?
pub fn is_reserved_word(word: &str) -> bool {
    ReservedSymbol::from_word(word).is_some()
}
