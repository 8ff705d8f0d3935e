use std::path::Path;
use std::time::Instant;

use eyre::{Result, WrapErr};

use depthwin_core_rs::num::Float;
use depthwin_core_rs::Table;
use depthwin_io_rs::compression::encode;
use depthwin_io_rs::compression::encode::params::Deflate;
use depthwin_io_rs::depth;
use depthwin_io_rs::ReadRecord;

use crate::chunking::{Chunker, Chunks};
use crate::config::{Config, LengthSource};
use crate::error::Error;
use crate::result::Summary;
use crate::window;

/// Thread-local state of the engine. Each call to [`Worker::process`] handles one file end to end.
#[derive(Debug, Default)]
pub struct Worker<F: Float> {
    // Reusable buffer for the parsed rows
    record: Vec<F>,
}

impl<F: Float> Worker<F> {
    pub fn process(&mut self, config: &Config, input: &Path) -> Result<Summary> {
        let start = Instant::now();

        let chunks = self
            .chunk(input, *config.increment())
            .wrap_err_with(|| Error::Input {
                path: input.to_path_buf(),
            })?;
        let rows = *chunks.rows();

        let length = match config.length() {
            LengthSource::Data => rows,
            LengthSource::Fixed(length) => {
                if *length != rows {
                    log::warn!(
                        "{}: sequence length is {}, but the table has {} rows",
                        input.display(),
                        length,
                        rows
                    );
                }
                *length
            }
        };

        let windows = window::roll(&chunks, config.chunks_per_window(), length)
            .wrap_err_with(|| format!("Failed to roll windows over {}", input.display()))?;

        let chunks_output = if *config.chunks() {
            let path = config.chunks_path(input)?;
            Self::write(&path, chunks.table(), *config.deflate())?;
            Some(path)
        } else {
            None
        };

        let output = config.windows_path(input)?;
        Self::write(&output, &windows, *config.deflate())?;

        let time_s = start.elapsed().as_secs_f64();
        log::info!(
            "{}: {} rows, {} chunks, {} windows -> {} ({:.2}s)",
            input.display(),
            rows,
            chunks.table().nrows(),
            windows.nrows(),
            output.display(),
            time_s
        );

        Ok(Summary::new(
            input.to_path_buf(),
            output,
            chunks_output,
            length,
            rows,
            chunks.table().nrows(),
            windows.nrows(),
            time_s,
        ))
    }

    fn chunk(&mut self, input: &Path, increment: usize) -> Result<Chunks<F>> {
        let mut reader = depth::Reader::from_path::<F>(input)?;
        let mut chunker = Chunker::new(reader.names().to_vec(), increment)?;
        while reader
            .read_record(&mut self.record)
            .wrap_err_with(|| format!("Failed to parse {}", input.display()))?
        {
            chunker.push(&self.record)?;
        }
        chunker.finish()
    }

    fn write(path: &Path, table: &Table<F>, deflate: Deflate) -> Result<()> {
        let compression = encode::Config::infer_from_path(path).with_deflate(deflate);
        let mut writer = depth::Writer::from_path::<F>(path, &compression, table.names())
            .wrap_err_with(|| format!("Failed to create {}", path.display()))?;
        writer.write_table(table)?;
        writer
            .finish()
            .wrap_err_with(|| format!("Failed to write {}", path.display()))
    }
}
