//! Command-line interface for the Tripwise recommendation engine.
//!
//! Every command reads its input from JSON files and writes pretty-printed
//! JSON to stdout, so the binary composes with `jq` and friends. Logs go to
//! stderr.
//!
//! - `tripwise recommend <request.json>` ranks the catalog for a
//!   [`RecommendRequest`].
//! - `tripwise itinerary <request.json>` plans the days described by an
//!   [`ItineraryRequest`](tripwise_core::ItineraryRequest).
//! - `tripwise catalog` lists the catalog destinations.
//!
//! Each command accepts `--catalog <path>` to replace the built-in catalog
//! with a JSON catalog document. Arguments may also come from configuration
//! files or `TRIPWISE_CMDS_<COMMAND>_<FIELD>` environment variables.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod catalog;
mod error;
mod input;
mod itinerary;
mod recommend;

pub use error::CliError;
pub use recommend::RecommendRequest;

use catalog::{CatalogArgs, run_catalog_with};
use itinerary::{ItineraryArgs, run_itinerary_with};
use recommend::{RecommendArgs, run_recommend_with};

pub(crate) const ARG_REQUEST: &str = "request";
pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ENV_RECOMMEND_REQUEST: &str = "TRIPWISE_CMDS_RECOMMEND_REQUEST_PATH";
pub(crate) const ENV_ITINERARY_REQUEST: &str = "TRIPWISE_CMDS_ITINERARY_REQUEST_PATH";

/// Run the Tripwise CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration layering,
/// input loading or output writing fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &mut stdout)
}

fn run_command(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Recommend(args) => run_recommend_with(args, writer),
        Command::Itinerary(args) => run_itinerary_with(args, writer),
        Command::Catalog(args) => run_catalog_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tripwise",
    about = "Destination recommendations and itineraries from the Tripwise engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank destinations against weighted preferences.
    Recommend(RecommendArgs),
    /// Plan a day-by-day itinerary for a destination.
    Itinerary(ItineraryArgs),
    /// List the catalog destinations.
    Catalog(CatalogArgs),
}

#[cfg(test)]
mod tests;
