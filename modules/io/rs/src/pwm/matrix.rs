use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};

/// Nucleotides in the order used for the matrix columns.
pub const ALPHABET: [char; 4] = ['A', 'C', 'G', 'T'];

/// Letter-probability matrix with one row per motif position and one column per nucleotide
/// (in [`ALPHABET`] order).
#[derive(Clone, PartialEq, Debug, Dissolve, Getters)]
pub struct Matrix {
    positions: Vec<[f64; 4]>,
}

impl Matrix {
    pub fn new(positions: Vec<[f64; 4]>) -> Result<Self> {
        ensure!(
            !positions.is_empty(),
            "Probability matrix must have at least one position"
        );
        for (ind, position) in positions.iter().enumerate() {
            ensure!(
                position.iter().all(|x| x.is_finite() && (0.0..=1.0).contains(x)),
                "Probabilities at position {} must be within [0, 1]: {:?}",
                ind + 1,
                position
            );
        }
        Ok(Self { positions })
    }

    /// Motif width.
    pub fn width(&self) -> usize {
        self.positions.len()
    }
}
