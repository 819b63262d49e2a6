//! Error types for dataset decoding.

use std::path::PathBuf;

/// Errors that can occur while reading or decoding a dataset.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The dataset file could not be opened or read.
    #[error("Failed to read dataset {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The dataset is not a JSON array of records.
    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
    /// A record decoded but holds a value the engine cannot accept.
    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}
