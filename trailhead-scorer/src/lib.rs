//! Categorisation and match scoring for Trailhead trails.
//!
//! The crate provides three cooperating pieces:
//! - **Keyword categorisation** derives each trail's category set from its
//!   name, description and translation using a category → keywords
//!   dictionary ([`KeywordCategorizer`], [`categorize`]).
//! - **Preference mapping** turns a visitor's preference vector into a
//!   category → weight table with a cached maximum score
//!   ([`PreferenceMapper`]).
//! - **Match scoring** blends how much of the visitor's weight a trail
//!   captures with how much of the trail the visitor cares about
//!   ([`MatchScorer`]).
//!
//! [`ScoringSession`] ties them together and annotates whole collections in
//! parallel.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use trailhead_core::{CategoryDictionary, PreferenceDimension, Trail, UserPreferences};
//! use trailhead_scorer::ScoringSession;
//!
//! let dictionary = CategoryDictionary::new(BTreeMap::from([
//!     ("Forest".to_owned(), vec!["forest".to_owned(), "bush".to_owned()]),
//!     ("Alpine".to_owned(), vec!["mountain".to_owned()]),
//! ]))
//! .expect("valid dictionary");
//! let prefs = UserPreferences::new()
//!     .with_level(PreferenceDimension::Bush, 4)
//!     .with_level(PreferenceDimension::Mountain, 4);
//!
//! let session = ScoringSession::new(&dictionary, &prefs).expect("compile dictionary");
//! let scored = session.annotate(vec![Trail::new(1, "A forest walk near the mountain")]);
//! assert_eq!(scored[0].categories().len(), 2);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod categorizer;
mod error;
mod mapper;
mod matcher;
mod session;

pub use categorizer::{KeywordCategorizer, categorize};
pub use error::{CategorizerError, ScoringError};
pub use mapper::{FLAG_WEIGHT, PREFERENCE_CATEGORIES, PreferenceInput, PreferenceMapper, categories};
pub use matcher::{COVERAGE_WEIGHT, MatchBreakdown, MatchScorer, STRENGTH_WEIGHT};
pub use session::ScoringSession;
