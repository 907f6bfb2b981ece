use std::path::Path;

use convocab::{
    training::WordVocabTrainerOptions,
    vocab::io::{VocabFileStatus, create_word_vocab_if_absent_with_progress},
};

use crate::{commands::CorpusArgs, logging::LogArgs};

/// Args for the build command.
#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    corpus: CorpusArgs,

    /// Target vocabulary file.
    #[arg(long)]
    vocab: String,

    /// Max vocab size, including the reserved symbols; 0 is unbounded.
    #[arg(long, default_value = "0")]
    max_vocab_size: usize,

    /// Remove an existing vocabulary file and rebuild it.
    #[arg(long)]
    force: bool,
}

impl BuildArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let status = self.build()?;
        match status {
            VocabFileStatus::Created { size } => {
                log::info!("Wrote {} words to {}", size, self.vocab)
            }
            VocabFileStatus::Existing => {
                log::info!("{} exists; use --force to rebuild", self.vocab)
            }
        }
        Ok(())
    }

    fn build(&self) -> Result<VocabFileStatus, Box<dyn std::error::Error>> {
        let vocab_path = Path::new(&self.vocab);
        if self.force && vocab_path.exists() {
            log::info!("Removing {}", self.vocab);
            std::fs::remove_file(vocab_path)?;
        }

        let options = WordVocabTrainerOptions::new(self.max_vocab_size)
            .with_corpus_options(self.corpus.options());

        Ok(create_word_vocab_if_absent_with_progress(
            vocab_path,
            &self.corpus.corpus,
            &options,
            |records| log::info!("processing line {records}"),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;

    use super::*;
    use crate::{Args, commands::Commands};

    fn parse_build(args: &[&str]) -> BuildArgs {
        let mut argv = vec!["convocab", "build"];
        argv.extend_from_slice(args);
        match Args::parse_from(argv).command {
            Commands::Build(build) => build,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_build_and_force() {
        let dir = tempdir::TempDir::new("convocab_cli").unwrap();
        let corpus = dir.path().join("corpus.tsv");
        let other = dir.path().join("other.tsv");
        let vocab = dir.path().join("vocab.txt");
        fs::write(&corpus, "a b\tb\tb\n").unwrap();
        fs::write(&other, "z\tz\tz\n").unwrap();

        let args = parse_build(&[
            "--corpus",
            corpus.to_str().unwrap(),
            "--vocab",
            vocab.to_str().unwrap(),
        ]);
        assert_eq!(args.build().unwrap(), VocabFileStatus::Created { size: 6 });
        assert_eq!(
            fs::read_to_string(&vocab).unwrap(),
            "_PAD\n_GO\n_EOS\n_UNK\nb\na\n"
        );

        let args = parse_build(&[
            "--corpus",
            other.to_str().unwrap(),
            "--vocab",
            vocab.to_str().unwrap(),
        ]);
        assert_eq!(args.build().unwrap(), VocabFileStatus::Existing);

        let args = parse_build(&[
            "--corpus",
            other.to_str().unwrap(),
            "--vocab",
            vocab.to_str().unwrap(),
            "--max-vocab-size",
            "5",
            "--force",
        ]);
        assert_eq!(args.build().unwrap(), VocabFileStatus::Created { size: 5 });
        assert_eq!(
            fs::read_to_string(&vocab).unwrap(),
            "_PAD\n_GO\n_EOS\n_UNK\nz\n"
        );
    }

    #[test]
    fn test_corpus_args() {
        let args = parse_build(&[
            "--corpus",
            "c.tsv",
            "--vocab",
            "v.txt",
            "--delimiter",
            "|",
            "--progress-interval",
            "10",
        ]);
        let options = args.corpus.options();
        assert_eq!(options.delimiter, '|');
        assert_eq!(options.progress_interval, 10);
        assert_eq!(args.max_vocab_size, 0);
    }
}
