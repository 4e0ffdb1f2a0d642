//! Filter, order and paginate scored trails.

use log::debug;
#[cfg(feature = "serde")]
use serde::Serialize;
use trailhead_core::ScoredTrail;

use crate::{FilterLabels, FilterState, SortKey};

/// Number of pages needed for `results` entries at `page_size` per page.
///
/// A page size of zero disables pagination and always yields one page.
///
/// # Examples
/// ```
/// use trailhead_search::page_count;
///
/// assert_eq!(page_count(101, 50), 3);
/// assert_eq!(page_count(0, 50), 0);
/// assert_eq!(page_count(101, 0), 1);
/// ```
#[must_use]
pub const fn page_count(results: usize, page_size: usize) -> usize {
    if page_size == 0 {
        1
    } else {
        results.div_ceil(page_size)
    }
}

/// One page of results plus the totals needed to render pagination.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SearchPage {
    /// Zero-based index of this page.
    pub page_index: usize,
    /// Number of pages at the requested page size.
    pub number_of_pages: usize,
    /// Number of trails that passed filtering.
    pub number_of_results: usize,
    /// Sort key that ordered the results.
    pub sort_key: SortKey,
    /// Whether the sort key's base ordering was applied as is.
    pub ascending: bool,
    /// Trails on this page, in order.
    pub trails: Vec<ScoredTrail>,
}

/// Stateless search over a snapshot of scored trails.
///
/// Every call filters and orders the supplied slice afresh, so concurrent
/// callers can share one pipeline and one snapshot.
///
/// # Examples
/// ```
/// use trailhead_core::{ScoredTrail, Trail};
/// use trailhead_search::{FilterState, SearchPipeline};
///
/// let trails: Vec<ScoredTrail> = ["Routeburn", "abel tasman", "Kepler"]
///     .into_iter()
///     .zip(1..)
///     .map(|(name, id)| Trail::new(id, name).into())
///     .collect();
/// let pipeline = SearchPipeline::default();
/// let state = FilterState::new().with_page_size(2);
///
/// let names: Vec<&str> = pipeline
///     .page(&trails, &state, 0)
///     .into_iter()
///     .map(|trail| trail.trail().name.as_str())
///     .collect();
/// assert_eq!(names, ["abel tasman", "Kepler"]);
/// assert_eq!(pipeline.number_of_pages(&trails, &state), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchPipeline {
    labels: FilterLabels,
}

impl SearchPipeline {
    /// Build a pipeline recognising `labels`.
    #[must_use]
    pub const fn new(labels: FilterLabels) -> Self {
        Self { labels }
    }

    /// Labels recognised by the filter stage.
    #[must_use]
    pub const fn labels(&self) -> &FilterLabels {
        &self.labels
    }

    /// Whether `trail` is part of the result set for `state`.
    #[must_use]
    pub fn admits(&self, trail: &ScoredTrail, state: &FilterState) -> bool {
        state.sort_key.admits(trail.trail()) && state.admits(trail.trail(), &self.labels)
    }

    /// Every matching trail in display order.
    #[must_use]
    pub fn results<'a>(
        &self,
        trails: &'a [ScoredTrail],
        state: &FilterState,
    ) -> Vec<&'a ScoredTrail> {
        let mut results: Vec<&ScoredTrail> = trails
            .iter()
            .filter(|trail| self.admits(trail, state))
            .collect();
        results.sort_by(|left, right| state.sort_key.compare(left, right, state.ascending));
        debug!(
            "search matched {} of {} trails sorted by {}",
            results.len(),
            trails.len(),
            state.sort_key
        );
        results
    }

    /// The trails on page `page_index`.
    ///
    /// Pages past the end are empty.
    #[must_use]
    pub fn page<'a>(
        &self,
        trails: &'a [ScoredTrail],
        state: &FilterState,
        page_index: usize,
    ) -> Vec<&'a ScoredTrail> {
        slice_page(self.results(trails, state), state.page_size, page_index)
    }

    /// Number of pages for `state`.
    #[must_use]
    pub fn number_of_pages(&self, trails: &[ScoredTrail], state: &FilterState) -> usize {
        page_count(self.number_of_results(trails, state), state.page_size)
    }

    /// Number of trails that pass filtering for `state`.
    #[must_use]
    pub fn number_of_results(&self, trails: &[ScoredTrail], state: &FilterState) -> usize {
        trails
            .iter()
            .filter(|trail| self.admits(trail, state))
            .count()
    }

    /// Page `page_index` together with its totals from a single pass.
    #[must_use]
    pub fn search(
        &self,
        trails: &[ScoredTrail],
        state: &FilterState,
        page_index: usize,
    ) -> SearchPage {
        let results = self.results(trails, state);
        let number_of_results = results.len();
        SearchPage {
            page_index,
            number_of_pages: page_count(number_of_results, state.page_size),
            number_of_results,
            sort_key: state.sort_key,
            ascending: state.ascending,
            trails: slice_page(results, state.page_size, page_index)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

fn slice_page<T>(results: Vec<T>, page_size: usize, page_index: usize) -> Vec<T> {
    if page_size == 0 {
        return if page_index == 0 { results } else { Vec::new() };
    }
    match page_index.checked_mul(page_size) {
        Some(start) => results.into_iter().skip(start).take(page_size).collect(),
        None => Vec::new(),
    }
}
