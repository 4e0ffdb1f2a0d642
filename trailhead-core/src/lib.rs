//! Core domain types for the Trailhead engine.
//!
//! This crate holds the trail model, category dictionaries, user preference
//! vectors and the weight tables derived from them, together with the
//! collaborator traits through which trails, dictionaries and preferences are
//! loaded. Scoring lives in `trailhead-scorer` and searching in
//! `trailhead-search`; both depend only on the types defined here.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod category;
pub mod preferences;
pub mod scorer;
pub mod source;
pub mod trail;
pub mod weights;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use category::{CategoryDictionary, CategoryDictionaryError};
pub use preferences::{MAX_LEVEL, PreferenceDimension, PreferenceFlag, UserPreferences};
pub use scorer::Scorer;
pub use source::{CategorySource, PreferenceSource, SourceError, TrailSource};
#[cfg(feature = "json-sources")]
pub use source::{JsonCategorySource, JsonPreferenceSource, JsonTrailSource};
pub use trail::{CategorySet, ScoredTrail, Trail};
pub use weights::WeightTable;
