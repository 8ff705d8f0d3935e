use super::matrix::{Matrix, ALPHABET};
use crate::compression::decode;
use eyre::{bail, ensure, eyre, Result, WrapErr};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// Sum of probabilities per position that triggers a warning
const TOLERANCE: f64 = 0.02;

pub mod parse {
    use super::*;

    /// Nucleotide index of a row label such as `A:`, `a` or `T|`.
    pub fn label(label: &str) -> Result<usize> {
        let trimmed = label.trim_end_matches(|c: char| !c.is_ascii_alphabetic());
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => ALPHABET
                .iter()
                .position(|x| *x == symbol.to_ascii_uppercase())
                .ok_or_else(|| eyre!("Unknown nucleotide in the matrix row label: {label}")),
            _ => bail!("Invalid matrix row label: {label}"),
        }
    }

    pub fn row(line: &str) -> Result<(usize, Vec<f64>)> {
        let mut parts = line.split_whitespace();
        let symbol = label(parts.next().ok_or_else(|| eyre!("Empty matrix row"))?)?;
        let probabilities = parts
            .map(|x| {
                x.parse::<f64>()
                    .wrap_err_with(|| format!("Invalid probability: {x}"))
            })
            .collect::<Result<Vec<_>>>()?;
        ensure!(!probabilities.is_empty(), "Matrix row has no probabilities");
        Ok((symbol, probabilities))
    }
}

pub struct Reader<R> {
    reader: R,
    buffer: String,
}

impl Reader<()> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Reader<BufReader<decode::Stream<File>>>> {
        Ok(Reader::new(BufReader::new(decode::infer_from_path(path)?)))
    }
}

impl<R: BufRead> Reader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
        }
    }

    /// Read the header line followed by the four nucleotide rows.
    pub fn read(&mut self) -> Result<Matrix> {
        self.buffer.clear();
        ensure!(
            self.reader.read_line(&mut self.buffer)? > 0,
            "PWM file is empty, expected a header line"
        );

        let mut rows: [Option<Vec<f64>>; 4] = Default::default();
        let mut found = 0;
        while found < ALPHABET.len() {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                bail!("PWM file has only {found} nucleotide rows, expected 4");
            }
            if self.buffer.trim().is_empty() {
                continue;
            }

            let (symbol, probabilities) = parse::row(&self.buffer)
                .wrap_err_with(|| format!("Failed to parse PWM row: {}", self.buffer.trim_end()))?;
            ensure!(
                rows[symbol].is_none(),
                "Nucleotide {} appears more than once",
                ALPHABET[symbol]
            );
            rows[symbol] = Some(probabilities);
            found += 1;
        }

        let rows = rows.map(|x| x.unwrap_or_default());
        let width = rows[0].len();
        ensure!(
            rows.iter().all(|x| x.len() == width),
            "All nucleotide rows must have the same number of positions"
        );

        let positions: Vec<[f64; 4]> = (0..width)
            .map(|ind| [rows[0][ind], rows[1][ind], rows[2][ind], rows[3][ind]])
            .collect();
        for (ind, position) in positions.iter().enumerate() {
            let total: f64 = position.iter().sum();
            if (total - 1.0).abs() > TOLERANCE {
                log::warn!(
                    "Probabilities at motif position {} sum to {total:.4}, not 1",
                    ind + 1
                );
            }
        }
        Matrix::new(positions)
    }
}
