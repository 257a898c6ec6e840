//! Errors for toy dataset loading.

use std::io;
use std::path::PathBuf;

use crate::data::DatasetError;

/// Errors that can occur when loading a toy dataset.
#[derive(Debug, thiserror::Error)]
pub enum ToyLoadError {
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error reading {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed {} at line {line}: {reason}", path.display())]
    Malformed {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("row count mismatch: {data} data rows, {target} targets")]
    RowCountMismatch { data: usize, target: usize },

    #[error("unknown toy dataset: {0:?}")]
    UnknownDataset(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Errors that can occur during data home configuration validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Digits have classes 0..=9, so at most 10 can be kept.
    #[error("digits_n_class must be in 1..=10, got {0}")]
    InvalidNClass(u8),
}
