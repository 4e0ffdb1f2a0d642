//! Filtering, ordering and pagination over scored trails.
//!
//! A [`SearchPipeline`] takes a snapshot of [`ScoredTrail`] values and a
//! [`FilterState`] and produces an ordered page of results. Filters are
//! AND-combined; within one filter type any selected value may match. The
//! chosen [`SortKey`] also decides membership: time ordering drops trails
//! without a duration and difficulty ordering drops trails of unknown
//! difficulty.
//!
//! Malformed input never fails a search. Blank selections impose no
//! restriction, unknown sort keys fall back to name order and a zero page size
//! yields a single unpaginated page.
//!
//! [`ScoredTrail`]: trailhead_core::ScoredTrail

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod filter;
mod labels;
mod pipeline;
mod sort;

pub use filter::{DEFAULT_PAGE_SIZE, FilterSelection, FilterState, FilterType};
pub use labels::FilterLabels;
pub use pipeline::{SearchPage, SearchPipeline, page_count};
pub use sort::{DIFFICULTY_ORDER, SortKey, UNKNOWN_DIFFICULTY, difficulty_rank};
