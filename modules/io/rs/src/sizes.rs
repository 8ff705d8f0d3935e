//! Two-column contig size tables (`chrom.sizes`): contig name, whitespace, total length.
//! Blank lines and lines starting with `#` are ignored, extra columns are allowed.

use depthwin_core_rs::genome::ContigSizes;
use eyre::{ensure, Context, OptionExt, Result};
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::compression::decode;

pub fn read(reader: impl BufRead) -> Result<ContigSizes> {
    let mut sizes = ContigSizes::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        let contig = parts.next().ok_or_eyre("Missing contig name")?;
        let length = parts
            .next()
            .ok_or_else(|| eyre::eyre!("Missing length for contig {contig} at line {}", ind + 1))?
            .parse::<u64>()
            .wrap_err_with(|| format!("Invalid length for contig {contig} at line {}", ind + 1))?;
        ensure!(length > 0, "Contig {contig} has zero length");
        ensure!(
            sizes.insert(contig.to_owned(), length).is_none(),
            "Contig {contig} is listed more than once"
        );
    }
    ensure!(!sizes.is_empty(), "Contig sizes table has no entries");
    Ok(sizes)
}

pub fn from_path(path: impl AsRef<Path>) -> Result<ContigSizes> {
    let path = path.as_ref();
    read(BufReader::new(decode::infer_from_path(path)?))
        .wrap_err_with(|| format!("Failed to read contig sizes from {}", path.display()))
}
