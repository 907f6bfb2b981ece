//! # Error Types

use std::path::PathBuf;

/// Errors from convocab operations.
#[derive(Debug, thiserror::Error)]
pub enum ConvocabError {
    /// A corpus line did not split into exactly three dialogue fields.
    #[error("malformed corpus record at line {line}: expected 3 fields, found {fields}")]
    MalformedRecord {
        /// The 1-based line number of the record.
        line: usize,

        /// The number of fields found on the line.
        fields: usize,
    },

    /// No vocabulary file exists at the requested path.
    #[error("vocabulary file {path:?} not found")]
    VocabNotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// A token id is outside the vocabulary.
    #[error("token id {id} out of range for vocabulary of size {len}")]
    InvalidId {
        /// The id that was requested.
        id: usize,

        /// The vocabulary size.
        len: usize,
    },

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for convocab operations.
pub type CVResult<T> = core::result::Result<T, ConvocabError>;
