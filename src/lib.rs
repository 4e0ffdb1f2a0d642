//! Facade crate for the Trailhead trail recommendation engine.
//!
//! This crate re-exports the core domain types together with the scoring and
//! search layers, so callers can depend on a single crate. JSON-backed sources
//! are available behind the `json-sources` feature.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use trailhead::{
//!     CategoryDictionary, FilterState, PreferenceDimension, ScoringSession, SearchPipeline,
//!     SortKey, Trail, UserPreferences,
//! };
//!
//! let dictionary = CategoryDictionary::new(BTreeMap::from([
//!     ("Forest".to_owned(), vec!["bush".to_owned()]),
//!     ("Alpine".to_owned(), vec!["mountain".to_owned()]),
//! ]))
//! .expect("valid dictionary");
//! let prefs = UserPreferences::new().with_level(PreferenceDimension::Mountain, 5);
//! let session = ScoringSession::new(&dictionary, &prefs).expect("compile dictionary");
//!
//! let scored = session.annotate(vec![
//!     Trail::new(1, "Bush loop"),
//!     Trail::new(2, "Mountain saddle"),
//! ]);
//! let state = FilterState::new().with_sort(SortKey::Match, true);
//! let page = SearchPipeline::default().search(&scored, &state, 0);
//!
//! assert_eq!(page.number_of_results, 2);
//! assert_eq!(page.trails[0].trail().id, 2);
//! ```

#![forbid(unsafe_code)]

pub use trailhead_core::{
    CategoryDictionary, CategoryDictionaryError, CategorySet, CategorySource, MAX_LEVEL,
    PreferenceDimension, PreferenceFlag, PreferenceSource, ScoredTrail, Scorer, SourceError,
    Trail, TrailSource, UserPreferences, WeightTable,
};

#[cfg(feature = "json-sources")]
pub use trailhead_core::{JsonCategorySource, JsonPreferenceSource, JsonTrailSource};

pub use trailhead_scorer::{
    CategorizerError, KeywordCategorizer, MatchBreakdown, MatchScorer, PreferenceMapper,
    ScoringError, ScoringSession, categorize,
};

pub use trailhead_search::{
    FilterLabels, FilterSelection, FilterState, FilterType, SearchPage, SearchPipeline, SortKey,
};
