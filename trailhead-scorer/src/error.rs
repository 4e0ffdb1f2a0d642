//! Error types raised while preparing a scoring session.
#![forbid(unsafe_code)]

use thiserror::Error;
use trailhead_core::SourceError;

/// Errors raised when compiling a category dictionary into a matcher.
#[derive(Debug, Error)]
pub enum CategorizerError {
    /// The keyword automaton could not be built.
    #[error("failed to compile {patterns} keywords into a matcher")]
    Build {
        /// Number of keyword patterns supplied.
        patterns: usize,
        /// Source error from `aho-corasick`.
        #[source]
        source: aho_corasick::BuildError,
    },
}

/// Errors raised while assembling a [`ScoringSession`](crate::ScoringSession).
#[derive(Debug, Error)]
pub enum ScoringError {
    /// A collaborator could not supply its data.
    #[error(transparent)]
    Source(#[from] SourceError),
    /// The category dictionary could not be compiled.
    #[error(transparent)]
    Categorizer(#[from] CategorizerError),
}
