//! Data access traits for trails, category dictionaries and preferences.
//!
//! The scoring and search layers never touch storage directly. Callers fetch
//! read-only snapshots through these collaborator traits and hand them to the
//! pure scoring and search functions.

use thiserror::Error;

use crate::{CategoryDictionary, Trail, UserPreferences};

#[cfg(feature = "json-sources")]
mod json;

#[cfg(feature = "json-sources")]
pub use json::{JsonCategorySource, JsonPreferenceSource, JsonTrailSource};

/// Error raised when a collaborator cannot supply its data.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading the backing artefact failed.
    #[error("failed to read {what} from {location}: {source}")]
    Io {
        /// Kind of record being loaded.
        what: &'static str,
        /// Where the data was expected.
        location: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The backing artefact could not be decoded.
    #[error("failed to decode {what} from {location}: {message}")]
    Decode {
        /// Kind of record being loaded.
        what: &'static str,
        /// Where the data was read from.
        location: String,
        /// Decoder diagnostic.
        message: String,
    },
    /// The backing store is not available at all.
    #[error("{what} source is unavailable: {reason}")]
    Unavailable {
        /// Kind of record being loaded.
        what: &'static str,
        /// Human-readable reason.
        reason: String,
    },
}

/// Read-only access to the trail collection.
pub trait TrailSource {
    /// Return a snapshot of every trail.
    ///
    /// # Errors
    /// Returns [`SourceError`] when the backing store cannot be read.
    fn list_all(&self) -> Result<Vec<Trail>, SourceError>;

    /// Return the trail with identifier `id`, if present.
    ///
    /// The default implementation scans [`TrailSource::list_all`].
    ///
    /// # Errors
    /// Returns [`SourceError`] when the backing store cannot be read.
    fn find_by_id(&self, id: u64) -> Result<Option<Trail>, SourceError> {
        Ok(self.list_all()?.into_iter().find(|trail| trail.id == id))
    }
}

/// Supplies the category keyword dictionary.
pub trait CategorySource {
    /// Return the current dictionary.
    ///
    /// # Errors
    /// Returns [`SourceError`] when the dictionary cannot be loaded.
    fn get(&self) -> Result<CategoryDictionary, SourceError>;
}

/// Supplies the visitor's preference vector.
pub trait PreferenceSource {
    /// Return the current preferences.
    ///
    /// # Errors
    /// Returns [`SourceError`] when the preferences cannot be loaded.
    fn preferences(&self) -> Result<UserPreferences, SourceError>;
}
