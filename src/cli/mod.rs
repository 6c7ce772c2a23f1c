//! Command line interface.

pub mod command;

use std::{path::PathBuf, time::Duration};

use clap::{command, Args, Parser, Subcommand};
use indicatif::ProgressBar;

use crate::{
    aggregator::{Source, DEFAULT_REGION, DEFAULT_URL},
    output::Format,
};

pub const DEFAULT_OUTPUT: &str = "data/maryland_weekly_cases.csv";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None, args_conflicts_with_subcommands = true)]
/// Contains the commands. Without a subcommand the weekly export runs.
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub weekly: WeeklyArgs,
}

impl Cli {
    /// The subcommand to run, falling back to `weekly` with the top-level arguments.
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Weekly(self.weekly))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write weekly new-case counts for one state
    Weekly(WeeklyArgs),
    /// List the region names present in the dataset
    Regions {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct WeeklyArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// State or territory, matched exactly against `Province_State`
    #[arg(short, long, env = "COVID_WEEKLY_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// File to create or overwrite
    #[arg(short, long, env = "COVID_WEEKLY_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Output file format
    #[arg(short, long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,
}

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Time-series CSV to download
    #[arg(long, env = "COVID_WEEKLY_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Read a local copy of the time series instead of downloading
    #[arg(short, long, value_name = "PATH", conflicts_with = "url")]
    pub input: Option<PathBuf>,

    /// Give up on the download after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl SourceArgs {
    pub fn source(&self) -> Source {
        match &self.input {
            Some(path) => Source::File(path.clone()),
            None => Source::Url(self.url.clone()),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

/// Creates a spinner.
pub fn create_spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));

    bar
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    fn weekly_args(args: &[&str]) -> WeeklyArgs {
        match Cli::try_parse_from(args).unwrap().into_command() {
            Commands::Weekly(weekly) => weekly,
            other => panic!("expected weekly command, got {:?}", other),
        }
    }

    #[test]
    fn should_default_to_weekly_without_arguments() {
        let weekly = weekly_args(&["covid-weekly"]);

        assert_eq!(weekly.source.source(), Source::Url(DEFAULT_URL.to_string()));
        assert_eq!(weekly.source.timeout(), None);
        assert_eq!(weekly.region, "Maryland");
        assert_eq!(weekly.output, PathBuf::from("data/maryland_weekly_cases.csv"));
        assert_eq!(weekly.format, Format::Csv);
    }

    #[test]
    fn should_accept_weekly_flags_without_subcommand() {
        let weekly = weekly_args(&["covid-weekly", "--region", "Delaware"]);

        assert_eq!(weekly.region, "Delaware");
        assert_eq!(weekly.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn should_default_weekly_subcommand_to_original_settings() {
        let weekly = weekly_args(&["covid-weekly", "weekly"]);

        assert_eq!(weekly.source.source(), Source::Url(DEFAULT_URL.to_string()));
        assert_eq!(weekly.region, "Maryland");
        assert_eq!(weekly.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(weekly.format, Format::Csv);
    }

    #[test]
    fn should_parse_overrides() {
        let weekly = weekly_args(&[
            "covid-weekly",
            "weekly",
            "--region",
            "Virginia",
            "--output",
            "out/va.parquet",
            "--format",
            "parquet",
            "--input",
            "confirmed_US.csv",
            "--timeout",
            "30",
        ]);

        assert_eq!(
            weekly.source.source(),
            Source::File(PathBuf::from("confirmed_US.csv"))
        );
        assert_eq!(weekly.source.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(weekly.region, "Virginia");
        assert_eq!(weekly.output, PathBuf::from("out/va.parquet"));
        assert_eq!(weekly.format, Format::Parquet);
    }

    #[test]
    fn should_reject_both_url_and_input() {
        let result = Cli::try_parse_from([
            "covid-weekly",
            "weekly",
            "--url",
            "http://localhost/x.csv",
            "--input",
            "confirmed_US.csv",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn should_parse_regions_command() {
        let cli =
            Cli::try_parse_from(["covid-weekly", "regions", "--url", "http://localhost/x.csv"])
                .unwrap();

        assert!(matches!(
            cli.into_command(),
            Commands::Regions { source } if source.url == "http://localhost/x.csv"
        ));
    }

    #[test]
    fn should_reject_unknown_format() {
        assert!(Cli::try_parse_from(["covid-weekly", "weekly", "--format", "xlsx"]).is_err());
    }
}
