//! Categorize command implementation for the Trailhead CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use trailhead_core::{
    CategorySet, CategorySource, JsonCategorySource, JsonTrailSource, TrailSource,
};
use trailhead_scorer::KeywordCategorizer;

use crate::artefacts::{require_existing, resolve_artefact, write_json};
use crate::{
    ARG_ARTEFACTS_DIR, ARG_CATEGORIES, ARG_TRAILS, CATEGORIES_FILE, CliError,
    ENV_CATEGORIZE_CATEGORIES, ENV_CATEGORIZE_TRAILS, TRAILS_FILE,
};

/// CLI arguments for the `categorize` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Match every trail's name, description and translation \
                 against the category dictionary and print the categories \
                 found for each trail as JSON.",
    about = "Print the categories each trail falls into"
)]
#[ortho_config(prefix = "TRAILHEAD")]
pub(crate) struct CategorizeArgs {
    /// Directory containing `trails.json` and `categories.json`.
    #[arg(long = ARG_ARTEFACTS_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) artefacts_dir: Option<Utf8PathBuf>,
    /// Override the path to the trail collection.
    #[arg(long = ARG_TRAILS, value_name = "path")]
    #[serde(default)]
    pub(crate) trails: Option<Utf8PathBuf>,
    /// Override the path to the category dictionary.
    #[arg(long = ARG_CATEGORIES, value_name = "path")]
    #[serde(default)]
    pub(crate) categories: Option<Utf8PathBuf>,
}

impl CategorizeArgs {
    fn into_config(self) -> Result<CategorizeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        CategorizeConfig::try_from(merged)
    }
}

/// Resolved `categorize` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategorizeConfig {
    pub(crate) trails: Utf8PathBuf,
    pub(crate) categories: Utf8PathBuf,
}

impl CategorizeConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.trails, ARG_TRAILS)?;
        require_existing(&self.categories, ARG_CATEGORIES)?;
        Ok(())
    }
}

impl TryFrom<CategorizeArgs> for CategorizeConfig {
    type Error = CliError;

    fn try_from(args: CategorizeArgs) -> Result<Self, Self::Error> {
        let dir = args.artefacts_dir.as_deref();
        Ok(Self {
            trails: resolve_artefact(
                args.trails,
                dir,
                TRAILS_FILE,
                ARG_TRAILS,
                ENV_CATEGORIZE_TRAILS,
            )?,
            categories: resolve_artefact(
                args.categories,
                dir,
                CATEGORIES_FILE,
                ARG_CATEGORIES,
                ENV_CATEGORIZE_CATEGORIES,
            )?,
        })
    }
}

/// One line of `categorize` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategorizedTrail {
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) categories: CategorySet,
}

pub(crate) fn run_categorize(args: CategorizeArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_categorize_with(args, &mut stdout)
}

pub(crate) fn run_categorize_with(
    args: CategorizeArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let categorized = execute_categorize(&config)?;
    write_json(writer, &categorized)
}

fn execute_categorize(config: &CategorizeConfig) -> Result<Vec<CategorizedTrail>, CliError> {
    let dictionary = JsonCategorySource::new(config.categories.clone())
        .get()
        .map_err(CliError::LoadCategories)?;
    let categorizer = KeywordCategorizer::new(&dictionary)?;
    let trails = JsonTrailSource::new(config.trails.clone())
        .list_all()
        .map_err(CliError::LoadTrails)?;
    info!(
        "categorising {} trails against {} categories",
        trails.len(),
        categorizer.category_count()
    );
    Ok(trails
        .into_iter()
        .map(|trail| CategorizedTrail {
            categories: categorizer.categorize(&trail),
            id: trail.id,
            name: trail.name,
        })
        .collect())
}
