use crate::compression::encode;
use crate::pwm::{Matrix, ALPHABET};
use eyre::{ensure, Result};
use itertools::Itertools;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Header at the top of each MEME file.
pub const HEADER: &str = "MEME version 4\n\nALPHABET= ACGT\n\nstrands: + -\n";

pub struct Writer<W> {
    writer: W,
    header: bool,
}

impl Writer<()> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Writer<encode::Stream<File>>> {
        Ok(Writer::new(encode::infer_from_path(path)?))
    }
}

impl<W: Write> Writer<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            header: false,
        }
    }

    /// Append a motif block, preceded by the file header if this is the first motif.
    pub fn write_motif(&mut self, name: &str, matrix: &Matrix) -> Result<()> {
        ensure!(
            !name.is_empty() && !name.contains(char::is_whitespace),
            "Invalid MEME motif name: {name:?}"
        );

        if !self.header {
            self.writer.write_all(HEADER.as_bytes())?;
            self.header = true;
        }

        writeln!(self.writer)?;
        writeln!(self.writer, "MOTIF {name}")?;
        writeln!(
            self.writer,
            "letter-probability matrix: alength= {} w= {}",
            ALPHABET.len(),
            matrix.width()
        )?;
        for position in matrix.positions() {
            writeln!(
                self.writer,
                "{}",
                position.iter().map(|x| format!("{x:.6}")).join("  ")
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl Writer<encode::Stream<File>> {
    pub fn finish(self) -> Result<()> {
        self.writer.finish()
    }
}
