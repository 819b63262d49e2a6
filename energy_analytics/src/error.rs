//! Error types for the analytics layer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the analytics engine and its settings loader.
///
/// An empty subset is never an error on its own: sums come back as `0` and
/// lists come back empty. Only operations that cannot give a meaningful
/// answer for empty or malformed input fail.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// An average was requested over a subset with no records.
    #[error("average is undefined for an empty subset")]
    DivisionUndefined,
    /// A grouping or labelling key was missing on a record.
    #[error("key selector returned no value for record {index} of the subset")]
    InvalidSelector { index: usize },
    /// Settings parsed but hold a value outside its allowed range.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    /// Settings file is not valid YAML for the expected shape.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_yml::Error),
    /// Settings file could not be read.
    #[error("Failed to read config {path}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
