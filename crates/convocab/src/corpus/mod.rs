//! # Dialogue Corpus
//!
//! A corpus is plain text with one [`DialogRecord`] per line.
//! Each record holds three conversational turns separated by
//! a single delimiter character (a tab by default).
//!
//! No escaping is supported; a turn containing the delimiter
//! will mis-split and be reported as malformed.

mod corpus_options;
mod corpus_reader;
mod dialog_record;

#[doc(inline)]
pub use corpus_options::{CorpusOptions, DEFAULT_FIELD_DELIMITER, DEFAULT_PROGRESS_INTERVAL};
#[doc(inline)]
pub use corpus_reader::{CorpusLines, open_corpus_path, read_corpus_lines};
#[doc(inline)]
pub use dialog_record::{DialogRecord, RECORD_FIELD_COUNT};
