use crate::compression::encode;
use crate::WriteRecord;
use depthwin_core_rs::num::Float;
use depthwin_core_rs::Table;
use eyre::{ensure, Result};
use itertools::Itertools;
use std::fs::File;
use std::io::Write;
use std::marker::PhantomData;
use std::path::Path;

/// Number of decimal places written for every value.
pub const PRECISION: usize = 5;

pub struct Writer<W, F> {
    writer: W,
    columns: usize,
    _phantom: PhantomData<F>,
}

impl Writer<(), ()> {
    /// Create a depth table at the given path and write the header.
    pub fn from_path<F: Float>(
        path: impl AsRef<Path>,
        compression: &encode::Config,
        names: &[String],
    ) -> Result<Writer<encode::Stream<File>, F>> {
        let file = File::create(path.as_ref())?;
        Writer::new(encode::Stream::new(file, compression)?, names)
    }
}

impl<W: Write, F: Float> Writer<W, F> {
    /// Wrap the writer and immediately write the header line.
    pub fn new(mut writer: W, names: &[String]) -> Result<Self> {
        ensure!(!names.is_empty(), "Depth table must have at least one column");
        writeln!(writer, "{}", names.iter().join("\t"))?;
        Ok(Self {
            writer,
            columns: names.len(),
            _phantom: PhantomData,
        })
    }

    pub fn write_row(&mut self, row: impl Iterator<Item = F>) -> Result<()> {
        let mut written = 0;
        for value in row {
            if written > 0 {
                self.writer.write_all(b"\t")?;
            }
            write!(self.writer, "{:.*}", PRECISION, value)?;
            written += 1;
        }
        ensure!(
            written == self.columns,
            "Row has {} values, but the table has {} columns",
            written,
            self.columns
        );
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn write_table(&mut self, table: &Table<F>) -> Result<()> {
        for ind in 0..table.nrows() {
            self.write_row(table.row(ind))?;
        }
        Ok(())
    }
}

impl<F: Float> Writer<encode::Stream<File>, F> {
    /// Flush all buffered rows and finalize the compressed stream.
    pub fn finish(self) -> Result<()> {
        self.writer.finish()
    }
}

impl<W: Write, F: Float> WriteRecord for Writer<W, F> {
    type Record = Vec<F>;

    fn write_record(&mut self, record: &Self::Record) -> Result<()> {
        self.write_row(record.iter().copied())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
