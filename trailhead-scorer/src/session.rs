//! Categorise and score whole trail collections.
//!
//! A [`ScoringSession`] owns the compiled keyword matcher and the weight table
//! for the current visitor. Annotation never mutates the input trails: each
//! pass builds a fresh `Vec<ScoredTrail>`, so concurrent readers of an older
//! snapshot are unaffected.

#![forbid(unsafe_code)]

use std::sync::Arc;

use log::{debug, warn};
use rayon::prelude::*;
use trailhead_core::{
    CategoryDictionary, CategorySource, PreferenceSource, ScoredTrail, Scorer, SourceError, Trail,
    TrailSource, UserPreferences, WeightTable,
};

use crate::{CategorizerError, KeywordCategorizer, MatchScorer, PreferenceMapper, ScoringError};

/// Compiled dictionary plus weights for one visitor.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use trailhead_core::{CategoryDictionary, PreferenceDimension, Trail, UserPreferences};
/// use trailhead_scorer::ScoringSession;
///
/// # fn main() -> Result<(), trailhead_scorer::CategorizerError> {
/// let dictionary = CategoryDictionary::new(BTreeMap::from([
///     ("Alpine".to_owned(), vec!["mountain".to_owned()]),
/// ])).expect("valid dictionary");
/// let prefs = UserPreferences::new().with_level(PreferenceDimension::Mountain, 4);
/// let session = ScoringSession::new(&dictionary, &prefs)?;
///
/// let scored = session.annotate(vec![Trail::new(1, "Mountain Loop")]);
/// assert_eq!(scored[0].match_score(), 1.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ScoringSession<S = MatchScorer> {
    categorizer: KeywordCategorizer,
    weights: Arc<WeightTable>,
    scorer: S,
}

impl ScoringSession<MatchScorer> {
    /// Compile `dictionary` and derive weights from `prefs`.
    ///
    /// # Errors
    /// Returns [`CategorizerError`] when the dictionary cannot be compiled.
    pub fn new(
        dictionary: &CategoryDictionary,
        prefs: &UserPreferences,
    ) -> Result<Self, CategorizerError> {
        Self::with_scorer(dictionary, prefs, MatchScorer)
    }

    /// Load the dictionary and preferences from their collaborators.
    ///
    /// # Errors
    /// Returns [`ScoringError::Source`] when a collaborator fails and
    /// [`ScoringError::Categorizer`] when the dictionary cannot be compiled.
    pub fn from_sources<C, P>(categories: &C, preferences: &P) -> Result<Self, ScoringError>
    where
        C: CategorySource + ?Sized,
        P: PreferenceSource + ?Sized,
    {
        let dictionary = categories.get()?;
        let prefs = preferences.preferences()?;
        Ok(Self::new(&dictionary, &prefs)?)
    }
}

impl<S: Scorer> ScoringSession<S> {
    /// Build a session with a custom scorer.
    ///
    /// # Errors
    /// Returns [`CategorizerError`] when the dictionary cannot be compiled.
    pub fn with_scorer(
        dictionary: &CategoryDictionary,
        prefs: &UserPreferences,
        scorer: S,
    ) -> Result<Self, CategorizerError> {
        let unmapped = PreferenceMapper::unmapped_categories(dictionary);
        if !unmapped.is_empty() {
            warn!(
                "categories {unmapped:?} have no preference mapping and will always weigh zero"
            );
        }
        Ok(Self {
            categorizer: KeywordCategorizer::new(dictionary)?,
            weights: Arc::new(PreferenceMapper::build_weights(prefs)),
            scorer,
        })
    }

    /// Weights for the current preferences.
    #[must_use]
    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Shared handle to the current weights.
    #[must_use]
    pub fn shared_weights(&self) -> Arc<WeightTable> {
        Arc::clone(&self.weights)
    }

    /// Swap in a weight table built from `prefs`.
    ///
    /// The table is rebuilt in full and replaced in one assignment; earlier
    /// handles from [`ScoringSession::shared_weights`] keep the old table.
    pub fn replace_preferences(&mut self, prefs: &UserPreferences) {
        self.weights = Arc::new(PreferenceMapper::build_weights(prefs));
    }

    /// Categorise and score a single trail.
    #[must_use]
    pub fn annotate_one(&self, trail: impl Into<Arc<Trail>>) -> ScoredTrail {
        let trail = trail.into();
        let categories = self.categorizer.categorize(&trail);
        let score = self.scorer.score(&categories, &self.weights);
        ScoredTrail::new(trail, categories, score)
    }

    /// Categorise and score every trail in parallel, preserving input order.
    #[must_use]
    pub fn annotate(&self, trails: Vec<Trail>) -> Vec<ScoredTrail> {
        let scored: Vec<ScoredTrail> = trails
            .into_par_iter()
            .map(|trail| self.annotate_one(trail))
            .collect();
        debug!("annotated {} trails", scored.len());
        scored
    }

    /// Load every trail from `source` and annotate it.
    ///
    /// # Errors
    /// Propagates the source's [`SourceError`].
    pub fn annotate_source<T>(&self, source: &T) -> Result<Vec<ScoredTrail>, SourceError>
    where
        T: TrailSource + ?Sized,
    {
        Ok(self.annotate(source.list_all()?))
    }

    /// Recompute scores for already categorised trails.
    ///
    /// Use after [`ScoringSession::replace_preferences`]; categories depend
    /// only on the dictionary and are reused.
    #[must_use]
    pub fn rescore(&self, scored: &[ScoredTrail]) -> Vec<ScoredTrail> {
        scored
            .par_iter()
            .map(|entry| {
                let score = self.scorer.score(entry.categories(), &self.weights);
                ScoredTrail::new(entry.shared_trail(), entry.categories().clone(), score)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use trailhead_core::PreferenceDimension;
    use trailhead_core::test_support::{
        FixedCategorySource, FixedPreferenceSource, MemoryTrailSource, UnavailableTrailSource,
        dictionary,
    };

    #[fixture]
    fn session() -> ScoringSession {
        let dictionary = dictionary(&[("Forest", &["forest", "bush"]), ("Alpine", &["mountain"])]);
        let prefs = UserPreferences::new()
            .with_level(PreferenceDimension::Bush, 4)
            .with_level(PreferenceDimension::Mountain, 4);
        ScoringSession::new(&dictionary, &prefs).expect("build session")
    }

    fn trails() -> Vec<Trail> {
        vec![
            Trail::new(1, "A forest walk near the mountain"),
            Trail::new(2, "Harbour promenade"),
            Trail::new(3, "Mountain saddle"),
        ]
    }

    #[rstest]
    #[expect(clippy::float_cmp, reason = "full matches score exactly one")]
    fn annotation_preserves_order_and_scores(session: ScoringSession) {
        let scored = session.annotate(trails());
        let ids: Vec<u64> = scored.iter().map(|entry| entry.trail().id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(scored.first().map(ScoredTrail::match_score), Some(1.0));
        assert_eq!(scored.get(1).map(ScoredTrail::match_score), Some(0.0));
    }

    #[rstest]
    fn replacing_preferences_rebuilds_the_table(mut session: ScoringSession) {
        let before = session.shared_weights();
        session.replace_preferences(&UserPreferences::new());
        assert_eq!(before.max_score(), 8);
        assert_eq!(session.weights().max_score(), 0);
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "tolerance checks subtract scores")]
    fn rescoring_reuses_categories(mut session: ScoringSession) {
        let scored = session.annotate(trails());
        session.replace_preferences(
            &UserPreferences::new().with_level(PreferenceDimension::Mountain, 5),
        );
        let rescored = session.rescore(&scored);
        let alpine_only = rescored.get(2).expect("third trail");
        assert_eq!(alpine_only.categories(), scored.get(2).expect("third").categories());
        assert!((alpine_only.match_score() - 1.0).abs() < 1e-6);
        let mixed = rescored.first().expect("first trail");
        assert!((mixed.match_score() - 0.9).abs() < 1e-6);
    }

    #[rstest]
    fn sessions_load_from_collaborators() {
        let categories = FixedCategorySource(dictionary(&[("Wet", &["lake"])]));
        let prefs = FixedPreferenceSource(
            UserPreferences::new().with_level(PreferenceDimension::LakeRiver, 3),
        );
        let session = ScoringSession::from_sources(&categories, &prefs).expect("build session");
        let scored = session
            .annotate_source(&MemoryTrailSource::with_trails([Trail::new(9, "Lake loop")]))
            .expect("annotate");
        assert_eq!(scored.len(), 1);
    }

    #[rstest]
    fn trail_source_failures_propagate(session: ScoringSession) {
        let err = session
            .annotate_source(&UnavailableTrailSource)
            .expect_err("source should fail");
        assert!(matches!(err, SourceError::Unavailable { .. }));
    }
}
