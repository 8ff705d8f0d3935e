use derive_more::{Display, Error};
use std::path::PathBuf;

/// Failure categories of the sliding-window pipeline. They travel inside [`eyre::Report`] and
/// can be recovered with `report.downcast_ref::<Error>()`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Invalid parameters, detected before any file is touched.
    #[display("Configuration error: {reason}")]
    Configuration { reason: String },

    /// The input file is missing, unreadable, empty or holds non-numeric values.
    #[display("Input error: failed to read {}", path.display())]
    Input { path: PathBuf },

    /// The input is too short to fill a single window.
    #[display(
        "Insufficient data: {chunks} chunk(s) available, but a window spans {required} chunk(s)"
    )]
    InsufficientData { chunks: usize, required: usize },
}

impl Error {
    pub fn configuration(reason: impl Into<String>) -> Self {
        Error::Configuration {
            reason: reason.into(),
        }
    }
}
