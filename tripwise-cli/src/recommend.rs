//! `recommend` command: rank the catalog for a caller's preferences.

use std::io::Write;
use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tripwise_core::{Preference, Recommendation, Recommender, SelectionHistory};
use tripwise_scorer::WeightedRecommender;

use crate::input::{RequestConfig, load_catalog, load_json, write_json};
use crate::{ARG_CATALOG, ARG_REQUEST, CliError, ENV_RECOMMEND_REQUEST};

/// JSON body accepted by `tripwise recommend`.
///
/// # Examples
/// ```
/// use tripwise_cli::RecommendRequest;
///
/// let request: RecommendRequest = serde_json::from_str(
///     r#"{"preferences":[{"id":"1","label":"Art","selected":true,"importance":100}],
///         "previousSelections":["1"]}"#,
/// ).unwrap();
/// assert_eq!(request.preferences.len(), 1);
/// assert!(request.previous_selections.contains("1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    /// Caller preferences; only selected entries contribute to scores.
    #[serde(default)]
    pub preferences: Vec<Preference>,
    /// Destination ids chosen earlier, boosted during ranking.
    #[serde(default)]
    pub previous_selections: SelectionHistory,
}

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank every catalog destination against the weighted \
                 preferences in a JSON RecommendRequest. Destinations the \
                 caller picked before are boosted. Without any selected \
                 preference the catalog is ordered by rating.",
    about = "Rank destinations for a set of preferences"
)]
#[ortho_config(prefix = "TRIPWISE")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing a RecommendRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to a JSON catalog document replacing the built-in catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RequestConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RequestConfig::try_from(merged)
    }
}

impl TryFrom<RecommendArgs> for RequestConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_RECOMMEND_REQUEST,
        })?;
        Ok(Self {
            request_path,
            catalog: args.catalog,
        })
    }
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let ranked = execute_recommend(args)?;
    write_json(writer, &ranked)
}

fn execute_recommend(args: RecommendArgs) -> Result<Vec<Recommendation>, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let request: RecommendRequest = load_json(&config.request_path, "recommend request")?;
    let catalog = load_catalog(config.catalog.as_deref())?;
    let recommender = WeightedRecommender::new(Arc::new(catalog));
    Ok(recommender.recommend(&request.preferences, &request.previous_selections))
}

#[cfg(test)]
pub(crate) fn recommend_config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RequestConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RequestConfig::try_from(merged)
}
