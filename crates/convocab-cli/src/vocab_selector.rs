use std::sync::Arc;

use convocab::{WordVocab, vocab::io::load_word_vocab_path};

/// Vocabulary file arg group.
#[derive(clap::Args, Debug)]
pub struct VocabSelectorArgs {
    /// Vocabulary file, one word per line.
    #[arg(long)]
    vocab: String,
}

impl VocabSelectorArgs {
    /// The vocabulary path.
    pub fn path(&self) -> &str {
        &self.vocab
    }

    /// Load the vocabulary.
    pub fn load_vocab(&self) -> Result<Arc<WordVocab<u32>>, Box<dyn std::error::Error>> {
        let vocab: WordVocab<u32> = load_word_vocab_path(self.path())?;
        if !vocab.has_reserved_layout() {
            log::warn!(
                "{}: vocabulary does not start with the reserved symbols; unknown words still encode as id 3",
                self.path()
            );
        }
        Ok(Arc::new(vocab))
    }
}
