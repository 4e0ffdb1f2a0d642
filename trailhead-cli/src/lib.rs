//! Command-line interface for categorising and searching trail artefacts.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod artefacts;
mod categorize;
mod error;
mod search;

pub use error::CliError;

use categorize::{CategorizeArgs, run_categorize};
use search::{SearchArgs, run_search};

pub(crate) const ARG_ARTEFACTS_DIR: &str = "artefacts-dir";
pub(crate) const ARG_TRAILS: &str = "trails";
pub(crate) const ARG_CATEGORIES: &str = "categories";
pub(crate) const ARG_PREFERENCES: &str = "preferences";
pub(crate) const ARG_LABELS: &str = "labels";
pub(crate) const ARG_QUERY: &str = "query";
pub(crate) const ARG_COMPLETION_TYPE: &str = "completion-type";
pub(crate) const ARG_TIME_UNIT: &str = "time-unit";
pub(crate) const ARG_DIFFICULTY: &str = "difficulty";
pub(crate) const ARG_MULTI_DAY: &str = "multi-day";
pub(crate) const ARG_REGIONS: &str = "regions";
pub(crate) const ARG_SORT: &str = "sort";
pub(crate) const ARG_DESCENDING: &str = "descending";
pub(crate) const ARG_PAGE: &str = "page";
pub(crate) const ARG_PAGE_SIZE: &str = "page-size";

pub(crate) const ENV_CATEGORIZE_TRAILS: &str = "TRAILHEAD_CMDS_CATEGORIZE_TRAILS";
pub(crate) const ENV_CATEGORIZE_CATEGORIES: &str = "TRAILHEAD_CMDS_CATEGORIZE_CATEGORIES";
pub(crate) const ENV_SEARCH_TRAILS: &str = "TRAILHEAD_CMDS_SEARCH_TRAILS";
pub(crate) const ENV_SEARCH_CATEGORIES: &str = "TRAILHEAD_CMDS_SEARCH_CATEGORIES";
pub(crate) const ENV_SEARCH_PREFERENCES: &str = "TRAILHEAD_CMDS_SEARCH_PREFERENCES";

/// Default trail collection file name inside `--artefacts-dir`.
pub(crate) const TRAILS_FILE: &str = "trails.json";
/// Default category dictionary file name inside `--artefacts-dir`.
pub(crate) const CATEGORIES_FILE: &str = "categories.json";
/// Default preference record file name inside `--artefacts-dir`.
pub(crate) const PREFERENCES_FILE: &str = "preferences.json";

/// Install the `RUST_LOG`-filtered log subscriber.
///
/// Logs go to stderr so JSON on stdout stays machine-readable. Fails when a
/// global subscriber is already installed.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
}

/// Run the Trailhead CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Categorize(args) => run_categorize(args),
        Command::Search(args) => run_search(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "trailhead",
    about = "Categorise, score and search walking trails",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the categories each trail falls into.
    Categorize(CategorizeArgs),
    /// Score trails against visitor preferences and print one page of results.
    Search(SearchArgs),
}

#[cfg(test)]
mod tests;
