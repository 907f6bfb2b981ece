mod build;
mod decode;
mod encode;
mod stats;

/// Subcommands for convocab
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build a vocabulary from a corpus, unless the vocabulary file exists.
    Build(build::BuildArgs),

    /// Encode sentences, one per line, into token ids.
    Encode(encode::EncodeArgs),

    /// Decode token id lines back into sentences.
    Decode(decode::DecodeArgs),

    /// Report corpus word coverage at candidate vocabulary sizes.
    Stats(stats::StatsArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Build(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
            Commands::Stats(cmd) => cmd.run(),
        }
    }
}

/// Corpus reading arg group.
#[derive(clap::Args, Debug)]
pub struct CorpusArgs {
    /// Corpus file: one record of three tab-separated turns per line.
    #[arg(long)]
    pub corpus: String,

    /// Field delimiter between turns.
    #[arg(long, default_value_t = convocab::corpus::DEFAULT_FIELD_DELIMITER)]
    pub delimiter: char,

    /// Records between progress reports; 0 disables them.
    #[arg(long, default_value_t = convocab::corpus::DEFAULT_PROGRESS_INTERVAL)]
    pub progress_interval: usize,
}

impl CorpusArgs {
    /// The corpus options.
    pub fn options(&self) -> convocab::corpus::CorpusOptions {
        convocab::corpus::CorpusOptions::default()
            .with_delimiter(self.delimiter)
            .with_progress_interval(self.progress_interval)
    }
}
