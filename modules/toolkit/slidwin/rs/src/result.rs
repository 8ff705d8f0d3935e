use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use std::path::PathBuf;

/// Report of a successfully processed depth table.
#[derive(Clone, PartialEq, Debug, Constructor, Dissolve, Getters)]
pub struct Summary {
    input: PathBuf,
    output: PathBuf,
    chunks_output: Option<PathBuf>,
    // Sequence length used for the boundary correction
    length: u64,
    // Number of data rows in the input
    rows: u64,
    chunks: usize,
    windows: usize,
    time_s: f64,
}

/// Per-file result of a batch run, reported in the input order.
#[derive(Debug, Constructor, Dissolve, Getters)]
pub struct Outcome {
    input: PathBuf,
    result: eyre::Result<Summary>,
}
