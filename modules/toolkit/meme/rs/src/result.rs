use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use std::path::PathBuf;

/// Report of a converted PWM file.
#[derive(Clone, PartialEq, Eq, Debug, Constructor, Dissolve, Getters)]
pub struct Converted {
    input: PathBuf,
    output: PathBuf,
    motif: String,
    width: usize,
}
