mod commands;
mod input_output;
mod logging;
mod vocab_selector;

use clap::Parser;
use commands::Commands;

/// convocab: build and apply conversational word vocabularies.
#[derive(clap::Parser, Debug)]
#[command(version)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}
