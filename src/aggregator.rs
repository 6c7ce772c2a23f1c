//! The fetch → filter → difference → resample pipeline.

use std::{path::PathBuf, time::Duration};

use indicatif::ProgressBar;
use tracing::{info, warn};

use crate::{
    dataset::{infer_date_schema, Table},
    download::{download_csv_with_progress, read_csv},
    error::Error,
    series::{to_cumulative_series, to_daily_series, to_weekly_series, Point},
};

/// JHU CSSE confirmed-case time series for US counties.
pub const DEFAULT_URL: &str = concat!(
    "https://raw.githubusercontent.com/CSSEGISandData/COVID-19/master/",
    "csse_covid_19_data/csse_covid_19_time_series/time_series_covid19_confirmed_US.csv"
);

pub const DEFAULT_REGION: &str = "Maryland";

/// Where the time series is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct WeeklyCaseAggregator {
    source: Source,
    region: String,
    timeout: Option<Duration>,
}

impl WeeklyCaseAggregator {
    pub fn new(source: Source, region: impl Into<String>) -> Self {
        WeeklyCaseAggregator {
            source,
            region: region.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Loads the dataset from the configured source.
    ///
    /// `progress_bar` is cleared once loading ends so later log lines are not
    /// drawn over.
    pub async fn fetch(&self, progress_bar: ProgressBar) -> Result<Table, Error> {
        let loaded = match &self.source {
            Source::Url(url) => {
                download_csv_with_progress(url, self.timeout, progress_bar.clone()).await
            }
            Source::File(path) => read_csv(path),
        };
        progress_bar.finish_and_clear();
        let text = loaded?;

        let table = Table::from_csv(&text)?;
        info!(rows = table.len(), columns = table.headers().len(), "dataset loaded");

        Ok(table)
    }

    /// Turns the table into weekly new-case counts for the configured region.
    pub fn aggregate(&self, table: &Table) -> Result<Vec<Point<u64>>, Error> {
        let subset = table.filter_region(&self.region);
        if subset.is_empty() {
            warn!(region = %self.region, "no rows match region");
        } else {
            info!(region = %self.region, rows = subset.len(), "rows matched");
        }

        let columns = infer_date_schema(table.headers())?;
        info!(date_columns = columns.len(), "date columns found");

        let cumulative = to_cumulative_series(&subset, &columns)?;
        let daily = to_daily_series(&cumulative);

        Ok(to_weekly_series(&daily))
    }

    pub async fn run(&self, progress_bar: ProgressBar) -> Result<Vec<Point<u64>>, Error> {
        let table = self.fetch(progress_bar).await?;
        self.aggregate(&table)
    }
}

// -- Tests -------------------------------------------------------------------
