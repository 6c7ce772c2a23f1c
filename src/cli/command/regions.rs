use anyhow::{Context, Result};

use crate::{
    aggregator::WeeklyCaseAggregator,
    cli::{create_spinner, SourceArgs},
};

/// Returns the distinct `Province_State` values, in dataset order.
pub async fn regions(source: &SourceArgs) -> Result<Vec<String>> {
    // The region filter is unused when only listing.
    let aggregator =
        WeeklyCaseAggregator::new(source.source(), "").with_timeout(source.timeout());

    let bar = create_spinner("Downloading time series...".to_string());
    let table = aggregator
        .fetch(bar)
        .await
        .context("could not load the time series")?;

    Ok(table.regions().into_iter().map(str::to_string).collect())
}

// -- Tests -------------------------------------------------------------------
