use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    aggregator::WeeklyCaseAggregator,
    cli::{create_spinner, WeeklyArgs},
    output,
};

pub async fn weekly(args: &WeeklyArgs) -> Result<PathBuf> {
    let aggregator = WeeklyCaseAggregator::new(args.source.source(), args.region.as_str())
        .with_timeout(args.source.timeout());

    let bar = create_spinner("Downloading time series...".to_string());
    let weekly = aggregator.run(bar).await.with_context(|| {
        format!("could not build weekly cases for `{}`", aggregator.region())
    })?;
    info!(weeks = weekly.len(), "weekly series built");

    output::persist(&weekly, &args.output, args.format)
        .with_context(|| format!("could not write `{}`", args.output.display()))?;

    Ok(args.output.clone())
}

// -- Tests -------------------------------------------------------------------
