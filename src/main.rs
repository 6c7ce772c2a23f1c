mod aggregator;
mod cli;
mod dataset;
mod download;
mod error;
mod logging;
mod output;
mod series;

use anyhow::Result;
use clap::Parser;
use cli::{command, Cli, Commands};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_logging();
    let cli = Cli::parse();

    match cli.into_command() {
        Commands::Weekly(args) => {
            let path = command::weekly(&args).await?;
            info!("File saved to `{}`", path.display());
        }
        Commands::Regions { source } => {
            for region in command::regions(&source).await? {
                println!("{}", region);
            }
        }
    }

    Ok(())
}
