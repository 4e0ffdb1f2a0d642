//! Display labels that stand for "no restriction" in filter selections.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::FilterType;

/// Labels recognised by the filter stage.
///
/// A selection containing [`FilterLabels::select_all`] or the filter type's
/// own "all" label imposes no restriction. Labels are compared
/// case-insensitively after trimming.
///
/// # Examples
/// ```
/// use trailhead_search::{FilterLabels, FilterType};
///
/// let labels = FilterLabels::default();
/// assert_eq!(labels.all_label(FilterType::Region), "All Regions");
/// assert!(labels.is_unrestricted(FilterType::Region, "all regions"));
/// assert!(!labels.is_unrestricted(FilterType::Region, "Canterbury"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FilterLabels {
    /// Sentinel accepted by every filter type.
    pub select_all: String,
    /// "All" label for [`FilterType::CompletionType`].
    pub all_completion_types: String,
    /// "All" label for [`FilterType::TimeUnit`].
    pub all_time_units: String,
    /// "All" label for [`FilterType::Difficulty`].
    pub all_difficulties: String,
    /// "All" label for [`FilterType::MultiDay`].
    pub all_trail_lengths: String,
    /// "All" label for [`FilterType::Region`].
    pub all_regions: String,
    /// Region assigned to trails without one.
    pub other_region: String,
}

impl Default for FilterLabels {
    fn default() -> Self {
        Self {
            select_all: "Select All".to_owned(),
            all_completion_types: "All Completion Types".to_owned(),
            all_time_units: "All Time Units".to_owned(),
            all_difficulties: "All Difficulties".to_owned(),
            all_trail_lengths: "All Trail Lengths".to_owned(),
            all_regions: "All Regions".to_owned(),
            other_region: "Other".to_owned(),
        }
    }
}

impl FilterLabels {
    /// The "all" label for `filter`.
    #[must_use]
    pub fn all_label(&self, filter: FilterType) -> &str {
        match filter {
            FilterType::CompletionType => &self.all_completion_types,
            FilterType::TimeUnit => &self.all_time_units,
            FilterType::Difficulty => &self.all_difficulties,
            FilterType::MultiDay => &self.all_trail_lengths,
            FilterType::Region => &self.all_regions,
        }
    }

    /// Whether `value` lifts every restriction for `filter`.
    #[must_use]
    pub fn is_unrestricted(&self, filter: FilterType, value: &str) -> bool {
        let candidate = value.trim();
        eq_ignore_case(candidate, self.select_all.trim())
            || eq_ignore_case(candidate, self.all_label(filter).trim())
    }
}

/// Unicode-aware case-insensitive equality.
pub(crate) fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}
