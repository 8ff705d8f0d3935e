use eyre::{ensure, OptionExt, Result};

use depthwin_core_rs::num::Float;
use depthwin_core_rs::{KahanSum, Table};

use crate::chunking::Chunks;
use crate::error::Error;

/// Trailing rolling mean over `span` consecutive chunks, one row per complete window.
///
/// When `length` is not a multiple of the chunk size, the last chunk averages only
/// `length % increment` positions and the final window is re-weighted accordingly:
///
/// ```text
/// corrected = (end * p / i + nonend) / (span - 1 + p / i)
/// ```
///
/// where `end` is the last chunk mean, `nonend` is the sum of the other chunk means of the window,
/// `p` is the size of the partial chunk and `i` is the increment.
pub fn roll<F: Float>(chunks: &Chunks<F>, span: usize, length: u64) -> Result<Table<F>> {
    ensure!(span > 0, Error::configuration("Window must span at least one chunk"));

    let table = chunks.table();
    let nchunks = table.nrows();
    if nchunks < span {
        return Err(Error::InsufficientData {
            chunks: nchunks,
            required: span,
        }
        .into());
    }

    let increment = *chunks.increment() as u64;
    let partial = length % increment;

    let count = F::from(span).ok_or_eyre("Window span is not representable")?;
    let weights = if span > 1 && partial != 0 {
        let p = F::from(partial).ok_or_eyre("Chunk size is not representable")?;
        let i = F::from(increment).ok_or_eyre("Chunk size is not representable")?;
        let denominator = F::from(span - 1).ok_or_eyre("Window span is not representable")? * i + p;
        Some((p, i, denominator))
    } else {
        None
    };

    let mut columns = Vec::with_capacity(table.ncols());
    for column in table.columns() {
        let mut windows: Vec<F> = column
            .windows(span)
            .map(|window| window.iter().copied().collect::<KahanSum<F>>().sum() / count)
            .collect();

        if let (Some((p, i, denominator)), Some(last)) = (weights, windows.last_mut()) {
            let end = column[nchunks - 1];
            let nonend = column[nchunks - span..nchunks - 1]
                .iter()
                .copied()
                .collect::<KahanSum<F>>()
                .sum();
            *last = (end * p + nonend * i) / denominator;
        }
        columns.push(windows);
    }

    Table::new(table.names().clone(), columns)
}
