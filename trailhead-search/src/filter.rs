//! Query, filter, sort and page-size selections for one search session.
//!
//! Filter selections travel as comma-joined strings, for example
//! `"Loop,One way"`. Blank entries are dropped and an empty selection imposes
//! no restriction, so malformed input degrades to "match everything" rather
//! than failing.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use log::warn;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use trailhead_core::Trail;

use crate::labels::eq_ignore_case;
use crate::{FilterLabels, SortKey};

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Trail attribute a filter selection applies to.
///
/// The wire identifiers are stable: `completionType`, `timeUnit`,
/// `difficulty`, `multiDay` and `regions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FilterType {
    /// How the trail is completed.
    #[cfg_attr(feature = "serde", serde(rename = "completionType"))]
    CompletionType,
    /// Unit of the quoted completion time.
    #[cfg_attr(feature = "serde", serde(rename = "timeUnit"))]
    TimeUnit,
    /// Difficulty tier.
    #[cfg_attr(feature = "serde", serde(rename = "difficulty"))]
    Difficulty,
    /// Multi-day flag, matched as `true` or `false`.
    #[cfg_attr(feature = "serde", serde(rename = "multiDay"))]
    MultiDay,
    /// Region, with [`FilterLabels::other_region`] standing in for none.
    #[cfg_attr(feature = "serde", serde(rename = "regions"))]
    Region,
}

impl FilterType {
    /// Every filter type in a stable order.
    pub const ALL: [Self; 5] = [
        Self::CompletionType,
        Self::TimeUnit,
        Self::Difficulty,
        Self::MultiDay,
        Self::Region,
    ];

    /// Stable wire identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CompletionType => "completionType",
            Self::TimeUnit => "timeUnit",
            Self::Difficulty => "difficulty",
            Self::MultiDay => "multiDay",
            Self::Region => "regions",
        }
    }

    /// The value of this attribute on `trail`.
    #[must_use]
    pub fn attribute<'a>(self, trail: &'a Trail, labels: &'a FilterLabels) -> &'a str {
        match self {
            Self::CompletionType => &trail.completion_type,
            Self::TimeUnit => &trail.time_unit,
            Self::Difficulty => &trail.difficulty,
            Self::MultiDay if trail.multi_day => "true",
            Self::MultiDay => "false",
            Self::Region => trail.region_or(&labels.other_region),
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown filter type: {s}"))
    }
}

/// Values selected for one filter type.
///
/// # Examples
/// ```
/// use trailhead_search::FilterSelection;
///
/// let selection = FilterSelection::parse("Loop, ,One way,");
/// assert_eq!(selection.values(), ["Loop", "One way"]);
/// assert_eq!(selection.to_wire(), "Loop,One way");
/// assert!(FilterSelection::parse(" , ").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub struct FilterSelection {
    values: Vec<String>,
}

impl FilterSelection {
    /// Build a selection from individual values, dropping blank entries.
    #[must_use]
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            values: values
                .into_iter()
                .map(|value| value.as_ref().trim().to_owned())
                .filter(|value| !value.is_empty())
                .collect(),
        }
    }

    /// Parse the comma-joined wire form.
    #[must_use]
    pub fn parse(wire: &str) -> Self {
        let selection = Self::new(wire.split(','));
        if selection.values.len() < wire.split(',').count() && !wire.trim().is_empty() {
            warn!("dropped blank entries from filter selection {wire:?}");
        }
        selection
    }

    /// Render the comma-joined wire form.
    #[must_use]
    pub fn to_wire(&self) -> String {
        self.values.join(",")
    }

    /// Selected values in input order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Whether nothing is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether a trail whose `filter` attribute is `attribute` passes.
    #[must_use]
    pub fn admits(&self, filter: FilterType, attribute: &str, labels: &FilterLabels) -> bool {
        self.values.is_empty()
            || self.values.iter().any(|value| {
                labels.is_unrestricted(filter, value) || eq_ignore_case(value, attribute.trim())
            })
    }
}

impl From<String> for FilterSelection {
    fn from(wire: String) -> Self {
        Self::parse(&wire)
    }
}

impl From<&str> for FilterSelection {
    fn from(wire: &str) -> Self {
        Self::parse(wire)
    }
}

impl From<FilterSelection> for String {
    fn from(selection: FilterSelection) -> Self {
        selection.to_wire()
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

/// Everything a search needs besides the trails themselves.
///
/// # Examples
/// ```
/// use trailhead_search::{FilterState, FilterType, SortKey};
///
/// let state = FilterState::new()
///     .with_query("track")
///     .with_filter(FilterType::Difficulty, "easy,intermediate")
///     .with_sort(SortKey::Time, false)
///     .with_page_size(20);
///
/// assert_eq!(state.filter(FilterType::Difficulty).map(|s| s.to_wire()),
///     Some("easy,intermediate".to_owned()));
/// assert!(state.filter(FilterType::Region).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FilterState {
    /// Case-insensitive substring matched against trail names.
    pub query: String,
    filters: BTreeMap<FilterType, FilterSelection>,
    /// Active sort key.
    pub sort_key: SortKey,
    /// Whether the sort key's base ordering applies as is.
    pub ascending: bool,
    /// Results per page; `0` disables pagination.
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "deserialize_page_size")
    )]
    pub page_size: usize,
}

/// Non-positive page sizes decode as `0`, a single unpaginated page.
#[cfg(feature = "serde")]
fn deserialize_page_size<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let requested = i64::deserialize(deserializer)?;
    if requested <= 0 {
        if requested < 0 {
            warn!("page size {requested} is negative; returning a single page");
        }
        return Ok(0);
    }
    Ok(usize::try_from(requested).unwrap_or(usize::MAX))
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            filters: BTreeMap::new(),
            sort_key: SortKey::default(),
            ascending: true,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilterState {
    /// A state with no query, no filters, name order and default page size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query while returning `self` for chaining.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set a filter selection while returning `self` for chaining.
    #[must_use]
    pub fn with_filter(
        mut self,
        filter: FilterType,
        selection: impl Into<FilterSelection>,
    ) -> Self {
        self.set_filter(filter, selection);
        self
    }

    /// Set the sort key and direction while returning `self` for chaining.
    #[must_use]
    pub const fn with_sort(mut self, sort_key: SortKey, ascending: bool) -> Self {
        self.sort_key = sort_key;
        self.ascending = ascending;
        self
    }

    /// Set the page size while returning `self` for chaining.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Replace the selection for `filter`.
    ///
    /// An empty selection clears the filter.
    pub fn set_filter(&mut self, filter: FilterType, selection: impl Into<FilterSelection>) {
        let parsed = selection.into();
        if parsed.is_empty() {
            self.filters.remove(&filter);
        } else {
            self.filters.insert(filter, parsed);
        }
    }

    /// Remove any selection for `filter`.
    pub fn clear_filter(&mut self, filter: FilterType) {
        self.filters.remove(&filter);
    }

    /// The selection for `filter`, if one is set.
    #[must_use]
    pub fn filter(&self, filter: FilterType) -> Option<&FilterSelection> {
        self.filters.get(&filter)
    }

    /// Every set filter in [`FilterType`] order.
    pub fn filters(&self) -> impl Iterator<Item = (FilterType, &FilterSelection)> {
        self.filters
            .iter()
            .map(|(filter, selection)| (*filter, selection))
    }

    /// Whether `trail` passes the query and every filter.
    ///
    /// Sort-dependent exclusion is applied separately by
    /// [`SortKey::admits`].
    #[must_use]
    pub fn admits(&self, trail: &Trail, labels: &FilterLabels) -> bool {
        self.matches_query(trail)
            && self.filters.iter().all(|(filter, selection)| {
                selection.admits(*filter, filter.attribute(trail, labels), labels)
            })
    }

    fn matches_query(&self, trail: &Trail) -> bool {
        let query = self.query.trim();
        query.is_empty() || trail.name.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn labels() -> FilterLabels {
        FilterLabels::default()
    }

    fn trail() -> Trail {
        Trail::new(1, "Rimutaka Rail Trail")
            .with_completion_type("One way")
            .with_time_unit("hours")
            .with_difficulty("easy")
            .with_region("Wellington")
    }

    #[rstest]
    #[case("completionType", FilterType::CompletionType)]
    #[case("timeUnit", FilterType::TimeUnit)]
    #[case("difficulty", FilterType::Difficulty)]
    #[case("multiDay", FilterType::MultiDay)]
    #[case("regions", FilterType::Region)]
    fn parses_wire_identifiers(#[case] wire: &str, #[case] expected: FilterType) {
        assert_eq!(wire.parse::<FilterType>(), Ok(expected));
        assert_eq!(expected.to_string(), wire);
    }

    #[rstest]
    fn rejects_unknown_identifiers() {
        assert!("distance".parse::<FilterType>().is_err());
    }

    #[rstest]
    #[case("", true)]
    #[case("  ", true)]
    #[case("rail", true)]
    #[case("RIMUTAKA", true)]
    #[case("crossing", false)]
    fn query_is_a_case_insensitive_name_substring(
        labels: FilterLabels,
        #[case] query: &str,
        #[case] expected: bool,
    ) {
        let state = FilterState::new().with_query(query);
        assert_eq!(state.admits(&trail(), &labels), expected);
    }

    #[rstest]
    #[case(FilterType::CompletionType, "one way", true)]
    #[case(FilterType::CompletionType, "Loop", false)]
    #[case(FilterType::CompletionType, "Loop,One way", true)]
    #[case(FilterType::TimeUnit, "Hours", true)]
    #[case(FilterType::Difficulty, "advanced,expert", false)]
    #[case(FilterType::Difficulty, "All Difficulties", true)]
    #[case(FilterType::Difficulty, "Select All", true)]
    #[case(FilterType::MultiDay, "false", true)]
    #[case(FilterType::MultiDay, "true", false)]
    #[case(FilterType::Region, "wellington", true)]
    #[case(FilterType::Region, "Other", false)]
    #[case(FilterType::Region, ",", true)]
    fn filters_match_case_insensitively(
        labels: FilterLabels,
        #[case] filter: FilterType,
        #[case] wire: &str,
        #[case] expected: bool,
    ) {
        let state = FilterState::new().with_filter(filter, wire);
        assert_eq!(state.admits(&trail(), &labels), expected);
    }

    #[rstest]
    #[case(None)]
    #[case(Some("   "))]
    fn trails_without_region_belong_to_other(labels: FilterLabels, #[case] region: Option<&str>) {
        let mut regionless = trail();
        regionless.region = region.map(str::to_owned);
        let state = FilterState::new().with_filter(FilterType::Region, "Other");
        assert!(state.admits(&regionless, &labels));
    }

    #[rstest]
    fn filters_are_and_combined(labels: FilterLabels) {
        let state = FilterState::new()
            .with_filter(FilterType::Difficulty, "easy")
            .with_filter(FilterType::Region, "Canterbury");
        assert!(!state.admits(&trail(), &labels));
    }

    #[rstest]
    fn empty_selections_clear_the_filter() {
        let mut state = FilterState::new().with_filter(FilterType::Difficulty, "easy");
        state.set_filter(FilterType::Difficulty, "");
        assert!(state.filter(FilterType::Difficulty).is_none());
        assert_eq!(state.filters().count(), 0);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn states_decode_from_camel_case_json() {
        let state: FilterState = serde_json::from_str(
            r#"{
                "query": "rail",
                "filters": {"regions": "Wellington,Other"},
                "sortKey": "time",
                "ascending": false
            }"#,
        )
        .expect("decode state");
        assert_eq!(state.sort_key, SortKey::Time);
        assert!(!state.ascending);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(
            state.filter(FilterType::Region).map(FilterSelection::values),
            Some(["Wellington".to_owned(), "Other".to_owned()].as_slice())
        );
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(r#"{"sortKey": "distance"}"#, SortKey::Name)]
    #[case(r#"{"sortKey": "MATCH"}"#, SortKey::Match)]
    fn unknown_sort_keys_decode_as_name(#[case] json: &str, #[case] expected: SortKey) {
        let state: FilterState = serde_json::from_str(json).expect("decode state");
        assert_eq!(state.sort_key, expected);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(r#"{"pageSize": -1}"#, 0)]
    #[case(r#"{"pageSize": 0}"#, 0)]
    #[case(r#"{"pageSize": 25}"#, 25)]
    fn non_positive_page_sizes_decode_as_unpaginated(#[case] json: &str, #[case] expected: usize) {
        let state: FilterState = serde_json::from_str(json).expect("decode state");
        assert_eq!(state.page_size, expected);
    }
}
