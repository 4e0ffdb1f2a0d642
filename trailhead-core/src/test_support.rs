//! Test-only, in-memory collaborators used by unit and behaviour tests.

use crate::{
    CategoryDictionary, CategorySource, PreferenceSource, SourceError, Trail, TrailSource,
    UserPreferences,
};

/// In-memory `TrailSource` implementation used in tests.
///
/// The store performs a linear scan and is intended only for small datasets.
#[derive(Default, Debug, Clone)]
pub struct MemoryTrailSource {
    trails: Vec<Trail>,
}

impl MemoryTrailSource {
    /// Create a source from a collection of trails.
    pub fn with_trails<I>(trails: I) -> Self
    where
        I: IntoIterator<Item = Trail>,
    {
        Self {
            trails: trails.into_iter().collect(),
        }
    }
}

impl TrailSource for MemoryTrailSource {
    fn list_all(&self) -> Result<Vec<Trail>, SourceError> {
        Ok(self.trails.clone())
    }
}

/// `TrailSource` that always fails, for exercising error propagation.
#[derive(Default, Debug, Clone, Copy)]
pub struct UnavailableTrailSource;

impl TrailSource for UnavailableTrailSource {
    fn list_all(&self) -> Result<Vec<Trail>, SourceError> {
        Err(SourceError::Unavailable {
            what: "trails",
            reason: "test source is offline".to_owned(),
        })
    }
}

/// `CategorySource` returning a fixed dictionary.
#[derive(Default, Debug, Clone)]
pub struct FixedCategorySource(pub CategoryDictionary);

impl CategorySource for FixedCategorySource {
    fn get(&self) -> Result<CategoryDictionary, SourceError> {
        Ok(self.0.clone())
    }
}

/// `PreferenceSource` returning a fixed vector.
#[derive(Default, Debug, Clone, Copy)]
pub struct FixedPreferenceSource(pub UserPreferences);

impl PreferenceSource for FixedPreferenceSource {
    fn preferences(&self) -> Result<UserPreferences, SourceError> {
        Ok(self.0)
    }
}

/// Build a dictionary from string slices, failing fast on invalid input.
///
/// # Panics
/// Panics when the entries do not form a valid dictionary.
#[must_use]
#[expect(clippy::expect_used, reason = "test helper should fail fast")]
pub fn dictionary(pairs: &[(&str, &[&str])]) -> CategoryDictionary {
    let entries = pairs
        .iter()
        .map(|(category, keywords)| {
            (
                (*category).to_owned(),
                keywords.iter().map(|keyword| (*keyword).to_owned()).collect(),
            )
        })
        .collect();
    CategoryDictionary::new(entries).expect("test dictionary should be valid")
}
