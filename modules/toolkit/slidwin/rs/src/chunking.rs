use derive_getters::{Dissolve, Getters};
use eyre::{bail, ensure, OptionExt, Result};

use depthwin_core_rs::num::Float;
use depthwin_core_rs::{KahanSum, Table};
use depthwin_io_rs::ReadRecord;

/// Per-column means of consecutive groups of `increment` rows. All groups but the last one are
/// full, the last one holds `((rows - 1) % increment) + 1` rows.
#[derive(Clone, PartialEq, Debug, Dissolve, Getters)]
pub struct Chunks<F: Float> {
    table: Table<F>,
    increment: usize,
    // Number of raw rows that were chunked
    rows: u64,
}

impl<F: Float> Chunks<F> {
    /// Number of raw rows averaged in the last chunk.
    pub fn last_size(&self) -> usize {
        ((self.rows - 1) % self.increment as u64) as usize + 1
    }
}

/// Streaming accumulator turning raw rows into chunk means without holding the raw table.
#[derive(Clone, Debug)]
pub struct Chunker<F: Float> {
    increment: usize,
    sums: Vec<KahanSum<F>>,
    means: Vec<F>,
    filled: usize,
    rows: u64,
    table: Table<F>,
}

impl<F: Float> Chunker<F> {
    pub fn new(names: Vec<String>, increment: usize) -> Result<Self> {
        ensure!(increment > 0, "Chunk size must be positive");
        let columns = names.len();
        Ok(Self {
            increment,
            sums: vec![KahanSum::new(); columns],
            means: Vec::with_capacity(columns),
            filled: 0,
            rows: 0,
            table: Table::empty(names)?,
        })
    }

    pub fn push(&mut self, row: &[F]) -> Result<()> {
        ensure!(
            row.len() == self.sums.len(),
            "Row has {} values, but the table has {} columns",
            row.len(),
            self.sums.len()
        );
        for (sum, value) in self.sums.iter_mut().zip(row) {
            sum.add(*value);
        }
        self.filled += 1;
        self.rows += 1;

        if self.filled == self.increment {
            self.close_chunk()?;
        }
        Ok(())
    }

    /// Close the trailing (possibly partial) chunk and return the result.
    pub fn finish(mut self) -> Result<Chunks<F>> {
        if self.rows == 0 {
            bail!("Depth table has no data rows");
        }
        self.close_chunk()?;
        Ok(Chunks {
            table: self.table,
            increment: self.increment,
            rows: self.rows,
        })
    }

    fn close_chunk(&mut self) -> Result<()> {
        if self.filled == 0 {
            return Ok(());
        }

        self.means.clear();
        for sum in &self.sums {
            let mean = sum.mean().ok_or_eyre("Chunk size is not representable")?;
            self.means.push(mean);
        }
        self.table.push_row(&self.means)?;

        self.sums.iter_mut().for_each(KahanSum::reset);
        self.filled = 0;
        Ok(())
    }
}

/// Chunk every remaining record of the reader.
pub fn chunk<F, R>(reader: &mut R, names: Vec<String>, increment: usize) -> Result<Chunks<F>>
where
    F: Float,
    R: ReadRecord<Record = Vec<F>>,
{
    let mut chunker = Chunker::new(names, increment)?;
    let mut record = Vec::new();
    while reader.read_record(&mut record)? {
        chunker.push(&record)?;
    }
    chunker.finish()
}
