//! Search command implementation for the Trailhead CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use trailhead_core::{JsonCategorySource, JsonPreferenceSource, JsonTrailSource};
use trailhead_scorer::ScoringSession;
use trailhead_search::{
    DEFAULT_PAGE_SIZE, FilterLabels, FilterState, FilterType, SearchPage, SearchPipeline, SortKey,
};

use crate::artefacts::{require_existing, resolve_artefact, write_json};
use crate::{
    ARG_ARTEFACTS_DIR, ARG_CATEGORIES, ARG_COMPLETION_TYPE, ARG_DESCENDING, ARG_DIFFICULTY,
    ARG_LABELS, ARG_MULTI_DAY, ARG_PAGE, ARG_PAGE_SIZE, ARG_PREFERENCES, ARG_QUERY, ARG_REGIONS,
    ARG_SORT, ARG_TIME_UNIT, ARG_TRAILS, CATEGORIES_FILE, CliError, ENV_SEARCH_CATEGORIES,
    ENV_SEARCH_PREFERENCES, ENV_SEARCH_TRAILS, PREFERENCES_FILE, TRAILS_FILE,
};

/// CLI arguments for the `search` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Categorise every trail, score it against the visitor's \
                 preferences, then filter, sort and paginate the result. \
                 Filter options take comma-separated values; an empty value \
                 imposes no restriction. Prints one page as JSON.",
    about = "Search scored trails"
)]
#[ortho_config(prefix = "TRAILHEAD")]
pub(crate) struct SearchArgs {
    /// Directory containing `trails.json`, `categories.json` and
    /// `preferences.json`.
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
    /// Override the path to the visitor's preferences.
    #[arg(long = ARG_PREFERENCES, value_name = "path")]
    #[serde(default)]
    pub(crate) preferences: Option<Utf8PathBuf>,
    /// JSON file overriding the "no restriction" filter labels.
    #[arg(long = ARG_LABELS, value_name = "path")]
    #[serde(default)]
    pub(crate) labels: Option<Utf8PathBuf>,
    /// Case-insensitive substring matched against trail names.
    #[arg(long = ARG_QUERY, value_name = "text")]
    #[serde(default)]
    pub(crate) query: Option<String>,
    /// Completion types to keep, for example "Loop,One way".
    #[arg(long = ARG_COMPLETION_TYPE, value_name = "values")]
    #[serde(default)]
    pub(crate) completion_type: Option<String>,
    /// Time units to keep.
    #[arg(long = ARG_TIME_UNIT, value_name = "values")]
    #[serde(default)]
    pub(crate) time_unit: Option<String>,
    /// Difficulty tiers to keep.
    #[arg(long = ARG_DIFFICULTY, value_name = "values")]
    #[serde(default)]
    pub(crate) difficulty: Option<String>,
    /// Multi-day values to keep: "true", "false" or both.
    #[arg(long = ARG_MULTI_DAY, value_name = "values")]
    #[serde(default)]
    pub(crate) multi_day: Option<String>,
    /// Regions to keep; "Other" matches trails without a region.
    #[arg(long = ARG_REGIONS, value_name = "values")]
    #[serde(default)]
    pub(crate) regions: Option<String>,
    /// Sort key: name, time, difficulty or match.
    #[arg(long = ARG_SORT, value_name = "key")]
    #[serde(default)]
    pub(crate) sort: Option<String>,
    /// Reverse the sort key's base ordering.
    #[arg(
        long = ARG_DESCENDING,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    #[serde(default)]
    pub(crate) descending: Option<bool>,
    /// Zero-based page to print.
    #[arg(long = ARG_PAGE, value_name = "index")]
    #[serde(default)]
    pub(crate) page: Option<usize>,
    /// Results per page; 0 prints every result on one page.
    #[arg(long = ARG_PAGE_SIZE, value_name = "count")]
    #[serde(default)]
    pub(crate) page_size: Option<usize>,
}

impl SearchArgs {
    fn into_config(self) -> Result<SearchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SearchConfig::try_from(merged)
    }
}

/// Resolved `search` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchConfig {
    pub(crate) trails: Utf8PathBuf,
    pub(crate) categories: Utf8PathBuf,
    pub(crate) preferences: Utf8PathBuf,
    pub(crate) labels: Option<Utf8PathBuf>,
    pub(crate) state: FilterState,
    pub(crate) page: usize,
}

impl SearchConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.trails, ARG_TRAILS)?;
        require_existing(&self.categories, ARG_CATEGORIES)?;
        require_existing(&self.preferences, ARG_PREFERENCES)?;
        if let Some(labels) = &self.labels {
            require_existing(labels, ARG_LABELS)?;
        }
        Ok(())
    }
}

impl TryFrom<SearchArgs> for SearchConfig {
    type Error = CliError;

    fn try_from(args: SearchArgs) -> Result<Self, Self::Error> {
        let dir = args.artefacts_dir.as_deref();
        let trails = resolve_artefact(
            args.trails,
            dir,
            TRAILS_FILE,
            ARG_TRAILS,
            ENV_SEARCH_TRAILS,
        )?;
        let categories = resolve_artefact(
            args.categories,
            dir,
            CATEGORIES_FILE,
            ARG_CATEGORIES,
            ENV_SEARCH_CATEGORIES,
        )?;
        let preferences = resolve_artefact(
            args.preferences,
            dir,
            PREFERENCES_FILE,
            ARG_PREFERENCES,
            ENV_SEARCH_PREFERENCES,
        )?;

        let mut state = FilterState::new()
            .with_query(args.query.unwrap_or_default())
            .with_sort(
                args.sort
                    .as_deref()
                    .map_or_else(SortKey::default, SortKey::parse_or_default),
                !args.descending.unwrap_or(false),
            )
            .with_page_size(args.page_size.unwrap_or(DEFAULT_PAGE_SIZE));
        for (filter, selection) in [
            (FilterType::CompletionType, args.completion_type),
            (FilterType::TimeUnit, args.time_unit),
            (FilterType::Difficulty, args.difficulty),
            (FilterType::MultiDay, args.multi_day),
            (FilterType::Region, args.regions),
        ] {
            if let Some(wire) = selection {
                state.set_filter(filter, wire);
            }
        }

        Ok(Self {
            trails,
            categories,
            preferences,
            labels: args.labels,
            state,
            page: args.page.unwrap_or(0),
        })
    }
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_search_with(args, &mut stdout)
}

pub(crate) fn run_search_with(args: SearchArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let page = execute_search(&config)?;
    write_json(writer, &page)
}

fn execute_search(config: &SearchConfig) -> Result<SearchPage, CliError> {
    let labels = match &config.labels {
        Some(path) => load_labels(path)?,
        None => FilterLabels::default(),
    };
    let session = ScoringSession::from_sources(
        &JsonCategorySource::new(config.categories.clone()),
        &JsonPreferenceSource::new(config.preferences.clone()),
    )?;
    let scored = session
        .annotate_source(&JsonTrailSource::new(config.trails.clone()))
        .map_err(CliError::LoadTrails)?;
    info!(
        "scored {} trails against a maximum of {}",
        scored.len(),
        session.weights().max_score()
    );
    Ok(SearchPipeline::new(labels).search(&scored, &config.state, config.page))
}

/// Loads [`FilterLabels`] from a JSON file; missing fields keep their defaults.
pub(crate) fn load_labels(path: &Utf8Path) -> Result<FilterLabels, CliError> {
    let contents =
        trailhead_fs::read_utf8_to_string(path).map_err(|source| CliError::ReadLabels {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&contents).map_err(|source| CliError::ParseLabels {
        path: path.to_path_buf(),
        source,
    })
}
