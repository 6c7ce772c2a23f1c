//! Persists the weekly series, replacing any file already at the path.

pub mod csv_writer;
pub mod parquet_writer;

use std::path::Path;

use clap::ValueEnum;
use tracing::info;

use crate::{error::Error, series::Point};

pub use csv_writer::save_csv;
pub use parquet_writer::save_parquet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Header `,cases` then one `YYYY-MM-DD,count` row per week
    #[default]
    Csv,
    /// Snappy-compressed Parquet with `week_ending` and `cases` columns
    Parquet,
}

pub fn persist(weekly: &[Point<u64>], path: &Path, format: Format) -> Result<(), Error> {
    match format {
        Format::Csv => save_csv(weekly, path)?,
        Format::Parquet => save_parquet(weekly, path)?,
    }

    info!(path = %path.display(), weeks = weekly.len(), ?format, "weekly series written");

    Ok(())
}
