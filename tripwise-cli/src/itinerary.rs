//! `itinerary` command: plan the days of a trip.

use std::io::Write;
use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tripwise_core::{ItineraryDay, ItineraryPlanner, ItineraryRequest};
use tripwise_planner::RotatingPlanner;

use crate::input::{RequestConfig, load_catalog, load_json, write_json};
use crate::{ARG_CATALOG, ARG_REQUEST, CliError, ENV_ITINERARY_REQUEST};

/// CLI arguments for the `itinerary` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Expand a JSON ItineraryRequest into day-by-day \
                 activities. Days rotate through the destination's sample \
                 activities; destinations without samples get a generic day.",
    about = "Plan an itinerary for a destination"
)]
#[ortho_config(prefix = "TRIPWISE")]
pub(crate) struct ItineraryArgs {
    /// Path to a JSON file containing an ItineraryRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to a JSON catalog document replacing the built-in catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl ItineraryArgs {
    pub(crate) fn into_config(self) -> Result<RequestConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RequestConfig::try_from(merged)
    }
}

impl TryFrom<ItineraryArgs> for RequestConfig {
    type Error = CliError;

    fn try_from(args: ItineraryArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_ITINERARY_REQUEST,
        })?;
        Ok(Self {
            request_path,
            catalog: args.catalog,
        })
    }
}

pub(crate) fn run_itinerary_with(
    args: ItineraryArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let days = execute_itinerary(args)?;
    write_json(writer, &days)
}

fn execute_itinerary(args: ItineraryArgs) -> Result<Vec<ItineraryDay>, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let request: ItineraryRequest = load_json(&config.request_path, "itinerary request")?;
    let catalog = load_catalog(config.catalog.as_deref())?;
    let planner = RotatingPlanner::new(Arc::new(catalog));
    Ok(planner.plan(&request))
}

#[cfg(test)]
pub(crate) fn itinerary_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RequestConfig, CliError> {
    let merged = ItineraryArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RequestConfig::try_from(merged)
}
