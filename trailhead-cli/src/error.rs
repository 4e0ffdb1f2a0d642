//! Error types emitted by the Trailhead CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use trailhead_core::SourceError;
use trailhead_scorer::{CategorizerError, ScoringError};

/// Errors emitted by the Trailhead CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field}, --artefacts-dir or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading the filter labels file failed.
    #[error("failed to read filter labels at {path:?}: {source}")]
    ReadLabels {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Filter labels JSON could not be decoded.
    #[error("failed to parse filter labels JSON at {path:?}: {source}")]
    ParseLabels {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Loading the trail collection failed.
    #[error("failed to load trails: {0}")]
    LoadTrails(#[source] SourceError),
    /// Loading the category dictionary failed.
    #[error("failed to load categories: {0}")]
    LoadCategories(#[source] SourceError),
    /// Compiling the category dictionary failed.
    #[error(transparent)]
    BuildCategorizer(#[from] CategorizerError),
    /// Building the scoring session failed.
    #[error(transparent)]
    BuildSession(#[from] ScoringError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
