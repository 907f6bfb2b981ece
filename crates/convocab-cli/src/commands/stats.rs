use convocab::{corpus::open_corpus_path, training::WordVocabTrainerOptions};

use crate::{commands::CorpusArgs, logging::LogArgs};

/// Args for the stats command.
#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    corpus: CorpusArgs,

    /// Vocabulary sizes to report coverage for.
    #[arg(long, value_delimiter = ',', default_value = "1000,3000,10000,40000")]
    top: Vec<usize>,
}

impl StatsArgs {
    /// Run the stats command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let options = WordVocabTrainerOptions::default().with_corpus_options(self.corpus.options());
        let mut trainer = options.init::<String, u64>();

        log::info!("Counting {}", self.corpus.corpus);
        trainer.update_from_reader(open_corpus_path(&self.corpus.corpus)?, |records| {
            log::info!("processing line {records}")
        })?;

        print!("{}", trainer.coverage(&self.top));
        Ok(())
    }
}
