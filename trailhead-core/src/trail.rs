//! Trails and their scored annotations.

use std::collections::BTreeSet;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A walking or tramping trail as supplied by a [`TrailSource`](crate::TrailSource).
///
/// Durations are already normalised to minutes; the raw completion text has
/// been parsed upstream.
///
/// # Examples
/// ```
/// use trailhead_core::Trail;
///
/// let trail = Trail::new(7, "Tongariro Crossing")
///     .with_description("Alpine crossing between volcanic craters")
///     .with_minutes(360, 480);
///
/// assert_eq!(trail.id, 7);
/// assert_eq!(trail.average_minutes(), 420.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Trail {
    /// Unique identifier.
    pub id: u64,
    /// Display name.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "null_as_default"))]
    pub name: String,
    /// Free-text description, if any.
    pub description: Option<String>,
    /// Alternative-language description, if any.
    pub translation: Option<String>,
    /// Difficulty tier, for example `easy` or `advanced`.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "null_as_default"))]
    pub difficulty: String,
    /// How the trail is completed, for example `Loop` or `One way`.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "null_as_default"))]
    pub completion_type: String,
    /// Unit the completion time was quoted in, for example `hours`.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "null_as_default"))]
    pub time_unit: String,
    /// Shortest quoted completion time in minutes.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "null_as_default"))]
    pub min_minutes: u32,
    /// Longest quoted completion time in minutes.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "null_as_default"))]
    pub max_minutes: u32,
    /// Whether the trail takes more than one day.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "null_as_default"))]
    pub multi_day: bool,
    /// Whether the quoted completion time varies with conditions.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "null_as_default"))]
    pub variable_time: bool,
    /// Region the trail belongs to, if known.
    pub region: Option<String>,
}

/// Decode `null` as the field's default so sparse records still load.
#[cfg(feature = "serde")]
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Trail {
    /// Construct a trail with a name and default attributes.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the description while returning `self` for chaining.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the translated description while returning `self` for chaining.
    #[must_use]
    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = Some(translation.into());
        self
    }

    /// Set the difficulty tier while returning `self` for chaining.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    /// Set the completion type while returning `self` for chaining.
    #[must_use]
    pub fn with_completion_type(mut self, completion_type: impl Into<String>) -> Self {
        self.completion_type = completion_type.into();
        self
    }

    /// Set the time unit while returning `self` for chaining.
    #[must_use]
    pub fn with_time_unit(mut self, time_unit: impl Into<String>) -> Self {
        self.time_unit = time_unit.into();
        self
    }

    /// Set the quoted completion range while returning `self` for chaining.
    #[must_use]
    pub const fn with_minutes(mut self, min_minutes: u32, max_minutes: u32) -> Self {
        self.min_minutes = min_minutes;
        self.max_minutes = max_minutes;
        self
    }

    /// Mark the trail as multi-day while returning `self` for chaining.
    #[must_use]
    pub const fn with_multi_day(mut self, multi_day: bool) -> Self {
        self.multi_day = multi_day;
        self
    }

    /// Set the region while returning `self` for chaining.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Midpoint of the quoted completion range in minutes.
    #[must_use]
    pub fn average_minutes(&self) -> f64 {
        f64::midpoint(f64::from(self.min_minutes), f64::from(self.max_minutes))
    }

    /// Whether no completion time is known for this trail.
    #[must_use]
    pub const fn has_no_duration(&self) -> bool {
        self.min_minutes == 0 && self.max_minutes == 0
    }

    /// Region name, substituting `fallback` when the trail has none.
    #[must_use]
    pub fn region_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.region.as_deref() {
            Some(region) if !region.trim().is_empty() => region,
            _ => fallback,
        }
    }

    /// Concatenate all descriptive text into one lower-cased search haystack.
    ///
    /// Missing fields contribute nothing. Fields are separated by newlines so
    /// that a keyword cannot straddle two fields.
    #[must_use]
    pub fn search_text(&self) -> String {
        [
            Some(self.name.as_str()),
            self.description.as_deref(),
            self.translation.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|text| !text.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("\n")
    }
}

/// Categories assigned to a trail by keyword matching.
pub type CategorySet = BTreeSet<String>;

/// A trail paired with its derived categories and match score.
///
/// Scored trails are produced as new values by each annotation pass; the
/// underlying [`Trail`] is shared and never mutated.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use trailhead_core::{ScoredTrail, Trail};
///
/// let scored = ScoredTrail::new(Trail::new(1, "Coast Track"), BTreeSet::new(), 0.0);
/// assert!(scored.categories().is_empty());
/// assert_eq!(scored.trail().name, "Coast Track");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScoredTrail {
    #[cfg_attr(feature = "serde", serde(flatten))]
    trail: Arc<Trail>,
    categories: CategorySet,
    match_score: f32,
}

impl ScoredTrail {
    /// Pair a trail with its annotations.
    #[must_use]
    pub fn new(trail: impl Into<Arc<Trail>>, categories: CategorySet, match_score: f32) -> Self {
        Self {
            trail: trail.into(),
            categories,
            match_score,
        }
    }

    /// The underlying trail.
    #[must_use]
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Shared handle to the underlying trail.
    #[must_use]
    pub fn shared_trail(&self) -> Arc<Trail> {
        Arc::clone(&self.trail)
    }

    /// Categories derived from the trail's text.
    #[must_use]
    pub const fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Match score in `0.0..=1.0`.
    #[must_use]
    pub const fn match_score(&self) -> f32 {
        self.match_score
    }
}

impl From<Trail> for ScoredTrail {
    fn from(trail: Trail) -> Self {
        Self::new(trail, CategorySet::new(), 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, 0.0)]
    #[case(60, 120, 90.0)]
    #[case(45, 45, 45.0)]
    #[expect(clippy::float_cmp, reason = "midpoints of small integers are exact")]
    fn average_is_midpoint(#[case] min: u32, #[case] max: u32, #[case] expected: f64) {
        let trail = Trail::new(1, "Track").with_minutes(min, max);
        assert_eq!(trail.average_minutes(), expected);
    }

    #[rstest]
    fn search_text_skips_missing_fields() {
        let trail = Trail::new(1, "Rob Roy GLACIER");
        assert_eq!(trail.search_text(), "rob roy glacier");
    }

    #[rstest]
    fn search_text_joins_all_descriptive_fields() {
        let trail = Trail::new(1, "Loop")
            .with_description("Native BUSH")
            .with_translation("Ngahere");
        assert_eq!(trail.search_text(), "loop\nnative bush\nngahere");
    }

    #[rstest]
    #[case(None, "Other")]
    #[case(Some("   "), "Other")]
    #[case(Some("Otago"), "Otago")]
    fn region_falls_back_when_absent(#[case] region: Option<&str>, #[case] expected: &str) {
        let mut trail = Trail::new(1, "Track");
        trail.region = region.map(str::to_owned);
        assert_eq!(trail.region_or("Other"), expected);
    }

    #[rstest]
    fn scored_trail_shares_underlying_trail() {
        let scored = ScoredTrail::from(Trail::new(3, "Ridge"));
        let again = ScoredTrail::new(scored.shared_trail(), CategorySet::new(), 0.5);
        assert!(Arc::ptr_eq(&scored.shared_trail(), &again.shared_trail()));
    }
}
