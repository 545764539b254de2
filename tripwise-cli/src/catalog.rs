//! `catalog` command: list the destinations a recommender would rank.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{load_catalog, require_existing, write_json};
use crate::{ARG_CATALOG, CliError};

/// CLI arguments for the `catalog` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Print the catalog destinations as JSON")]
#[ortho_config(prefix = "TRIPWISE")]
pub(crate) struct CatalogArgs {
    /// Path to a JSON catalog document replacing the built-in catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

pub(crate) fn run_catalog_with(args: CatalogArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    if let Some(path) = &merged.catalog {
        require_existing(path, ARG_CATALOG)?;
    }
    let catalog = load_catalog(merged.catalog.as_deref())?;
    write_json(writer, catalog.destinations())
}
