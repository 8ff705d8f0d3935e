use derive_getters::Getters;
use depthwin_io_rs::compression::encode::params::Deflate;
use eyre::{OptionExt, Result};
use std::path::{Path, PathBuf};

use crate::error::Error;

pub const DEFAULT_WINDOW: usize = 1000;
pub const DEFAULT_INCREMENT: usize = 500;

const WINDOWS_PREFIX: &str = "Win_";
const CHUNKS_PREFIX: &str = "Chunks_";

/// Where the total sequence length used by the boundary correction comes from.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LengthSource {
    /// Number of data rows in each input table.
    #[default]
    Data,
    /// Known length of the target sequence, shared by all inputs.
    Fixed(u64),
}

#[derive(Clone, PartialEq, Eq, Debug, Getters)]
pub struct Config {
    increment: usize,
    window: usize,
    length: LengthSource,
    // Persist the intermediate chunk table next to the windows
    chunks: bool,
    deflate: Deflate,
    outdir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            increment: DEFAULT_INCREMENT,
            window: DEFAULT_WINDOW,
            length: LengthSource::Data,
            chunks: false,
            deflate: Deflate::default(),
            outdir: None,
        }
    }
}

impl Config {
    pub fn new(increment: usize, window: usize) -> Result<Self> {
        if increment == 0 || window == 0 {
            return Err(Error::configuration(format!(
                "Window ({window}) and increment ({increment}) must be positive"
            ))
            .into());
        }
        if window % increment != 0 {
            return Err(Error::configuration(format!(
                "Window size ({window}) must be a multiple of the increment size ({increment})"
            ))
            .into());
        }
        Ok(Self {
            increment,
            window,
            ..Default::default()
        })
    }

    pub fn with_length(mut self, length: LengthSource) -> Result<Self> {
        if length == LengthSource::Fixed(0) {
            return Err(Error::configuration("Fixed sequence length must be positive").into());
        }
        self.length = length;
        Ok(self)
    }

    pub fn with_chunks(mut self, chunks: bool) -> Self {
        self.chunks = chunks;
        self
    }

    pub fn with_deflate(mut self, deflate: Deflate) -> Self {
        self.deflate = deflate;
        self
    }

    /// Directory for all outputs. By default, outputs are placed next to their inputs.
    pub fn with_outdir(mut self, outdir: Option<PathBuf>) -> Self {
        self.outdir = outdir;
        self
    }

    /// Number of chunks averaged in each window.
    pub fn chunks_per_window(&self) -> usize {
        self.window / self.increment
    }

    pub fn windows_path(&self, input: &Path) -> Result<PathBuf> {
        self.prefixed(input, WINDOWS_PREFIX)
    }

    pub fn chunks_path(&self, input: &Path) -> Result<PathBuf> {
        self.prefixed(input, CHUNKS_PREFIX)
    }

    fn prefixed(&self, input: &Path, prefix: &str) -> Result<PathBuf> {
        let name = input
            .file_name()
            .and_then(|x| x.to_str())
            .ok_or_eyre("Input path doesn't end with a valid file name")?;
        let name = format!("{prefix}{name}");

        let path = match (&self.outdir, input.parent()) {
            (Some(outdir), _) => outdir.join(name),
            (None, Some(parent)) => parent.join(name),
            (None, None) => PathBuf::from(name),
        };
        Ok(path)
    }
}
