use std::io::{BufRead, Write};

use convocab::{TokenDecoder, decoders::WordDecoder};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    vocab_selector::VocabSelectorArgs,
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    vocab: VocabSelectorArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let decoder = WordDecoder::new(self.vocab.load_vocab()?);

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_decode(&mut reader, &mut writer, &decoder)
    }
}

/// Decode each line of space-separated ids into one line of words.
pub fn run_decode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    decoder: &WordDecoder<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let tokens = line?
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<u32>, _>>()?;

        let text = decoder.try_decode_to_string(&tokens)?;
        writeln!(writer, "{text}")?;
    }
    writer.flush()?;
    Ok(())
}
