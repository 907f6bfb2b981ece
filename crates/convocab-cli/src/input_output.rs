use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

/// The path naming stdin or stdout.
const STANDARD_IO: &str = "-";

/// The file behind `path`; `None` for stdin/stdout.
fn file_path(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| p.as_os_str() != STANDARD_IO)
}

/// Line input arg group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Input file; stdin when absent or "-".
    #[arg(long)]
    input: Option<PathBuf>,
}

impl InputArgs {
    /// Open a line reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        let reader: Box<dyn BufRead> = match file_path(self.input.as_deref()) {
            Some(path) => {
                log::debug!("Reading {}", path.display());
                Box::new(BufReader::new(File::open(path)?))
            }
            None => Box::new(std::io::stdin().lock()),
        };
        Ok(reader)
    }
}

/// Line output arg group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Output file, replaced if present; stdout when absent or "-".
    #[arg(long)]
    output: Option<PathBuf>,
}

impl OutputArgs {
    /// Open a buffered writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        let writer: Box<dyn Write> = match file_path(self.output.as_deref()) {
            Some(path) => {
                log::debug!("Writing {}", path.display());
                Box::new(BufWriter::new(File::create(path)?))
            }
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        };
        Ok(writer)
    }
}
