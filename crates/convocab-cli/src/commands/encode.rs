use std::io::{BufRead, Write};

use convocab::{TokenEncoder, encoders::WordEncoder};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    vocab_selector::VocabSelectorArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    vocab: VocabSelectorArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let encoder = WordEncoder::new(self.vocab.load_vocab()?);

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_encode(&mut reader, &mut writer, &encoder)
    }
}

/// Encode each input line into one line of space-separated ids.
pub fn run_encode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    encoder: &WordEncoder<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut tokens: Vec<u32> = Vec::new();
    for line in reader.lines() {
        let line = line?;

        tokens.clear();
        encoder.encode_append(&line, &mut tokens);

        for (idx, token) in tokens.iter().enumerate() {
            write!(writer, "{}{}", if idx == 0 { "" } else { " " }, token)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{io::Cursor, sync::Arc};

    use convocab::WordVocab;

    use super::*;

    #[test]
    fn test_run_encode() {
        let vocab =
            WordVocab::from_words(["_PAD", "_GO", "_EOS", "_UNK", "hello", "world"]).unwrap();
        let encoder = WordEncoder::new(Arc::new(vocab));

        let mut reader = Cursor::new("hello world\n\nworld nope hello\n");
        let mut out: Vec<u8> = Vec::new();
        run_encode(&mut reader, &mut out, &encoder).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "4 5\n\n5 3 4\n");
    }
}
