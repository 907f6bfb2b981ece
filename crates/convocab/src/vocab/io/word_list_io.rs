//! # Word List Vocabulary IO

use std::{
    ffi::OsString,
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

use crate::{
    corpus::open_corpus_path,
    errors::{CVResult, ConvocabError},
    training::WordVocabTrainerOptions,
    types::TokenType,
    vocab::WordVocab,
};

/// Outcome of [`create_word_vocab_if_absent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VocabFileStatus {
    /// A new vocabulary file was written.
    Created {
        /// The number of words written.
        size: usize,
    },

    /// A vocabulary file already existed; nothing was done.
    Existing,
}

/// Read a word list from a line reader.
///
/// Trailing whitespace, including the line terminator, is stripped
/// from each line. Ids are assigned by line position.
pub fn read_word_list<R: BufRead>(reader: R) -> CVResult<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        words.push(line.trim_end().to_string());
    }
    Ok(words)
}

/// Read a [`WordVocab`] from a line reader.
pub fn read_word_vocab<T, R>(reader: R) -> CVResult<WordVocab<T>>
where
    T: TokenType,
    R: BufRead,
{
    WordVocab::from_words(read_word_list(reader)?)
}

/// Load a [`WordVocab`] from a word list file.
///
/// Loading is positional and does not validate the reserved symbol layout;
/// see [`WordVocab::has_reserved_layout`].
///
/// ## Arguments
/// * `path` - the path to the vocabulary file.
///
/// ## Returns
/// The vocabulary; or [`ConvocabError::VocabNotFound`] if `path` does not exist.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(path)))]
pub fn load_word_vocab_path<T, P>(path: P) -> CVResult<WordVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => ConvocabError::VocabNotFound {
            path: path.to_path_buf(),
        },
        _ => err.into(),
    })?;

    let vocab = read_word_vocab(BufReader::new(file))?;
    log::info!("Loaded vocabulary {:?}: {} words", path, vocab.len());
    Ok(vocab)
}

/// Write a word list to a [`Write`] writer, one newline-terminated word per line.
pub fn write_word_list<S, W>(
    words: &[S],
    writer: &mut W,
) -> CVResult<()>
where
    S: AsRef<str>,
    W: Write,
{
    for word in words {
        writeln!(writer, "{}", word.as_ref())?;
    }
    writer.flush()?;
    Ok(())
}

/// The sibling file a word list is staged in before it replaces `path`.
///
/// `vocab.txt` stages as `vocab.txt.tmp`.
pub fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Save a word list to a file, replacing any existing file.
///
/// The list is written to [`staging_path`] and renamed over `path` only
/// once complete; a failed save leaves `path` untouched and removes the
/// staging file.
pub fn save_word_list_path<S, P>(
    words: &[S],
    path: P,
) -> CVResult<()>
where
    S: AsRef<str>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let staging = staging_path(path);

    let result = write_word_list_file(words, &staging)
        .and_then(|()| fs::rename(&staging, path).map_err(ConvocabError::from));

    if let Err(err) = &result {
        log::warn!("Failed to save word list {:?}: {}", path, err);
        if staging.is_file() {
            let _ = fs::remove_file(&staging);
        }
    }
    result
}

fn write_word_list_file<S: AsRef<str>>(
    words: &[S],
    path: &Path,
) -> CVResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_word_list(words, &mut writer)
}

/// Save a [`WordVocab`] to a file, replacing any existing file.
pub fn save_word_vocab_path<T, P>(
    vocab: &WordVocab<T>,
    path: P,
) -> CVResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    save_word_list_path(vocab.words(), path)
}

/// Build and save a vocabulary, unless one already exists at `vocab_path`.
///
/// Existence of `vocab_path` alone gates the build: an existing file is
/// never rebuilt or checked against the corpus. Regenerating requires
/// removing the file first.
///
/// The existence check and the write are not atomic; concurrent callers
/// racing on the same missing path may both build it.
///
/// ## Arguments
/// * `vocab_path` - the target vocabulary file.
/// * `corpus_path` - the dialogue corpus to count.
/// * `options` - the trainer options.
pub fn create_word_vocab_if_absent<P, Q>(
    vocab_path: P,
    corpus_path: Q,
    options: &WordVocabTrainerOptions,
) -> CVResult<VocabFileStatus>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    create_word_vocab_if_absent_with_progress(vocab_path, corpus_path, options, |records| {
        log::debug!("processing record {records}")
    })
}

/// [`create_word_vocab_if_absent`] with a progress callback.
///
/// `progress` is called with the running record count every
/// [`crate::corpus::CorpusOptions::progress_interval`] records.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(vocab_path, corpus_path, progress))
)]
pub fn create_word_vocab_if_absent_with_progress<P, Q, F>(
    vocab_path: P,
    corpus_path: Q,
    options: &WordVocabTrainerOptions,
    progress: F,
) -> CVResult<VocabFileStatus>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    F: FnMut(usize),
{
    let vocab_path = vocab_path.as_ref();
    let corpus_path = corpus_path.as_ref();

    if vocab_path.exists() {
        log::info!("Vocabulary {:?} already exists", vocab_path);
        return Ok(VocabFileStatus::Existing);
    }

    log::info!(
        "Creating vocabulary {:?} from data {:?}",
        vocab_path,
        corpus_path
    );

    let mut trainer = options.clone().init::<String, u64>();
    trainer.update_from_reader(open_corpus_path(corpus_path)?, progress)?;
    let words = trainer.train_words();

    save_word_list_path(words.as_slice(), vocab_path)?;

    Ok(VocabFileStatus::Created { size: words.len() })
}
