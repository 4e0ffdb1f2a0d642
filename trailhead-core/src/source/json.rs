//! Collaborators backed by JSON artefacts on disk.

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use serde::de::DeserializeOwned;

use super::{CategorySource, PreferenceSource, SourceError, TrailSource};
use crate::{CategoryDictionary, Trail, UserPreferences};

fn load_json<T: DeserializeOwned>(path: &Utf8Path, what: &'static str) -> Result<T, SourceError> {
    let contents = trailhead_fs::read_utf8_to_string(path).map_err(|source| SourceError::Io {
        what,
        location: path.to_string(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|err| SourceError::Decode {
        what,
        location: path.to_string(),
        message: err.to_string(),
    })
}

/// Trail source reading a JSON array of trails.
///
/// The file is re-read on every call so that edits are picked up.
#[derive(Debug, Clone)]
pub struct JsonTrailSource {
    path: Utf8PathBuf,
}

impl JsonTrailSource {
    /// Read trails from `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TrailSource for JsonTrailSource {
    fn list_all(&self) -> Result<Vec<Trail>, SourceError> {
        let trails: Vec<Trail> = load_json(&self.path, "trails")?;
        debug!("loaded {} trails from {}", trails.len(), self.path);
        Ok(trails)
    }
}

/// Category source reading a JSON object of category to keyword list.
#[derive(Debug, Clone)]
pub struct JsonCategorySource {
    path: Utf8PathBuf,
}

impl JsonCategorySource {
    /// Read the dictionary from `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CategorySource for JsonCategorySource {
    fn get(&self) -> Result<CategoryDictionary, SourceError> {
        let dictionary: CategoryDictionary = load_json(&self.path, "category dictionary")?;
        debug!(
            "loaded {} categories from {}",
            dictionary.len(),
            self.path
        );
        Ok(dictionary)
    }
}

/// Preference source reading a single JSON preference record.
#[derive(Debug, Clone)]
pub struct JsonPreferenceSource {
    path: Utf8PathBuf,
}

impl JsonPreferenceSource {
    /// Read preferences from `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreferenceSource for JsonPreferenceSource {
    fn preferences(&self) -> Result<UserPreferences, SourceError> {
        load_json(&self.path, "preferences")
    }
}
