//! Output writers for simulation results.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::simulator::HandResult;
use crate::types::OutputFormat;

pub struct OutputWriter {
    writer: Box<dyn Write>,
    format: OutputFormat,
    path: Option<PathBuf>,
}

impl OutputWriter {
    /// Write to `path` when given, otherwise to stdout.
    pub fn new(path: Option<&Path>, format: OutputFormat) -> Result<Self, Box<dyn std::error::Error>> {
        let writer: Box<dyn Write> = match path {
            Some(p) => {
                if let Some(dir) = p.parent().filter(|d| !d.as_os_str().is_empty()) {
                    std::fs::create_dir_all(dir)?;
                }
                let file = OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(p)?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(BufWriter::new(io::stdout())),
        };
        Ok(Self {
            writer,
            format,
            path: path.map(Path::to_path_buf),
        })
    }

    pub fn write_hand(&mut self, result: &HandResult) -> Result<(), Box<dyn std::error::Error>> {
        match self.format {
            OutputFormat::Jsonl => {
                let json = serde_json::to_string(result)?;
                writeln!(self.writer, "{json}")?;
            }
            OutputFormat::Text => {
                writeln!(
                    self.writer,
                    "=== Hand {} (seed {}) ===",
                    result.hand_no, result.dealing_seed
                )?;
                for line in &result.log {
                    writeln!(self.writer, "{line}")?;
                }
                writeln!(self.writer, "RESULT: {:?}", result.winner_side)?;
                writeln!(self.writer)?;
            }
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn output_path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }
}
