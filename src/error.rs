//! Error kinds raised by the fetch, parse and persist stages.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The dataset host could not be reached or the transfer broke off.
    #[error("failed to fetch `{url}`: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The host answered with something other than a success status.
    #[error("failed to fetch `{url}`: server returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("malformed dataset: {0}")]
    Parse(String),

    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write parquet: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("failed to build record batch: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
