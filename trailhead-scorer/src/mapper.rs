//! Translate a visitor's preference vector into category weights.
//!
//! Each preference dimension feeds exactly one category through the fixed
//! [`PREFERENCE_CATEGORIES`] table. Categories outside the table can still
//! appear in a dictionary but always weigh zero.

#![forbid(unsafe_code)]

use log::debug;
use trailhead_core::{
    CategoryDictionary, PreferenceDimension, PreferenceFlag, UserPreferences, WeightTable,
};

/// Category names fed by the preference vector.
pub mod categories {
    /// Fed by [`Experience`](trailhead_core::PreferenceDimension::Experience).
    pub const DIFFICULT: &str = "Difficult";
    /// Fed by [`Gradient`](trailhead_core::PreferenceDimension::Gradient).
    pub const ROCKY: &str = "Rocky";
    /// Fed by [`Bush`](trailhead_core::PreferenceDimension::Bush).
    pub const FOREST: &str = "Forest";
    /// Fed by [`Reserve`](trailhead_core::PreferenceDimension::Reserve).
    pub const RESERVE: &str = "Reserve";
    /// Fed by [`LakeRiver`](trailhead_core::PreferenceDimension::LakeRiver).
    pub const WET: &str = "Wet";
    /// Fed by [`Coast`](trailhead_core::PreferenceDimension::Coast).
    pub const BEACH: &str = "Beach";
    /// Fed by [`Mountain`](trailhead_core::PreferenceDimension::Mountain).
    pub const ALPINE: &str = "Alpine";
    /// Fed by [`Wildlife`](trailhead_core::PreferenceDimension::Wildlife).
    pub const WILDLIFE: &str = "Wildlife";
    /// Fed by [`Historic`](trailhead_core::PreferenceDimension::Historic).
    pub const HISTORICAL: &str = "Historical";
    /// Fed by [`Waterfall`](trailhead_core::PreferenceDimension::Waterfall).
    pub const WATERFALL: &str = "Waterfall";
    /// Fed by [`FamilyFriendly`](trailhead_core::PreferenceFlag::FamilyFriendly).
    pub const FAMILY_FRIENDLY: &str = "FamilyFriendly";
    /// Fed by [`Accessible`](trailhead_core::PreferenceFlag::Accessible).
    pub const ACCESSIBLE: &str = "Accessible";
}

/// Weight assigned to a category whose boolean preference is set.
pub const FLAG_WEIGHT: u8 = 5;

/// A single input of the preference vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceInput {
    /// An ordinal level in `0..=5`.
    Level(PreferenceDimension),
    /// A boolean flag weighted `0` or [`FLAG_WEIGHT`].
    Flag(PreferenceFlag),
}

impl PreferenceInput {
    /// Weight this input contributes for `prefs`.
    #[must_use]
    pub fn weight(self, prefs: &UserPreferences) -> u8 {
        match self {
            Self::Level(dimension) => prefs.level(dimension),
            Self::Flag(flag) if prefs.flag(flag) => FLAG_WEIGHT,
            Self::Flag(_) => 0,
        }
    }
}

/// The fixed mapping from preference inputs to category names.
pub const PREFERENCE_CATEGORIES: [(PreferenceInput, &str); 12] = [
    (
        PreferenceInput::Level(PreferenceDimension::Experience),
        categories::DIFFICULT,
    ),
    (
        PreferenceInput::Level(PreferenceDimension::Gradient),
        categories::ROCKY,
    ),
    (
        PreferenceInput::Level(PreferenceDimension::Bush),
        categories::FOREST,
    ),
    (
        PreferenceInput::Level(PreferenceDimension::Reserve),
        categories::RESERVE,
    ),
    (
        PreferenceInput::Level(PreferenceDimension::LakeRiver),
        categories::WET,
    ),
    (
        PreferenceInput::Level(PreferenceDimension::Coast),
        categories::BEACH,
    ),
    (
        PreferenceInput::Level(PreferenceDimension::Mountain),
        categories::ALPINE,
    ),
    (
        PreferenceInput::Level(PreferenceDimension::Wildlife),
        categories::WILDLIFE,
    ),
    (
        PreferenceInput::Level(PreferenceDimension::Historic),
        categories::HISTORICAL,
    ),
    (
        PreferenceInput::Level(PreferenceDimension::Waterfall),
        categories::WATERFALL,
    ),
    (
        PreferenceInput::Flag(PreferenceFlag::FamilyFriendly),
        categories::FAMILY_FRIENDLY,
    ),
    (
        PreferenceInput::Flag(PreferenceFlag::Accessible),
        categories::ACCESSIBLE,
    ),
];

/// Builds [`WeightTable`] values from preference vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferenceMapper;

impl PreferenceMapper {
    /// Build the weight table for `prefs`.
    ///
    /// Every mapped category is present in the result, including those with
    /// zero weight, and the table's maximum score is the sum of all twelve
    /// weights.
    ///
    /// # Examples
    /// ```
    /// use trailhead_core::{PreferenceDimension, UserPreferences};
    /// use trailhead_scorer::PreferenceMapper;
    ///
    /// let prefs = UserPreferences::new()
    ///     .with_level(PreferenceDimension::Bush, 4)
    ///     .with_level(PreferenceDimension::Mountain, 4);
    /// let table = PreferenceMapper::build_weights(&prefs);
    ///
    /// assert_eq!(table.weight("Forest"), 4);
    /// assert_eq!(table.max_score(), 8);
    /// ```
    #[must_use]
    pub fn build_weights(prefs: &UserPreferences) -> WeightTable {
        let table = WeightTable::from_weights(
            PREFERENCE_CATEGORIES
                .iter()
                .map(|(input, category)| (*category, input.weight(prefs))),
        );
        debug!("built weight table with max score {}", table.max_score());
        table
    }

    /// Category fed by `input`.
    #[must_use]
    pub fn category_for(input: PreferenceInput) -> Option<&'static str> {
        PREFERENCE_CATEGORIES
            .iter()
            .find(|(candidate, _)| *candidate == input)
            .map(|(_, category)| *category)
    }

    /// Dictionary categories that no preference input can weight.
    ///
    /// Trails in these categories still count towards coverage totals but
    /// never contribute strength.
    #[must_use]
    pub fn unmapped_categories(dictionary: &CategoryDictionary) -> Vec<&str> {
        dictionary
            .categories()
            .filter(|category| {
                !PREFERENCE_CATEGORIES
                    .iter()
                    .any(|(_, mapped)| mapped == category)
            })
            .collect()
    }
}
