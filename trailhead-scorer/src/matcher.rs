//! Blend preference strength and category coverage into a match score.
//!
//! *Strength* is the share of the visitor's total weight captured by the
//! trail's matched categories. *Coverage* is the share of the trail's own
//! categories that the visitor weights at all. The score favours strength:
//! `score = 0.8 * strength + 0.2 * coverage`.

#![forbid(unsafe_code)]

use std::collections::BTreeSet;

use trailhead_core::{CategorySet, Scorer, WeightTable};

/// Share of the score contributed by strength.
pub const STRENGTH_WEIGHT: f32 = 0.8;

/// Share of the score contributed by coverage, `1 - STRENGTH_WEIGHT`.
pub const COVERAGE_WEIGHT: f32 = 0.2;

/// Components of a match score.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MatchBreakdown {
    /// Matched weight divided by the table's maximum score.
    pub strength: f32,
    /// Matched categories divided by the trail's category count.
    pub coverage: f32,
    /// Blended score in `0.0..=1.0`.
    pub score: f32,
}

/// Scorer implementing the strength/coverage blend.
///
/// # Examples
/// ```
/// use trailhead_core::{CategorySet, Scorer, WeightTable};
/// use trailhead_scorer::MatchScorer;
///
/// let weights = WeightTable::from_weights([("Forest", 4), ("Alpine", 4)]);
/// let categories = CategorySet::from(["Alpine".to_owned()]);
///
/// let score = MatchScorer.score(&categories, &weights);
/// assert!((score - 0.6).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchScorer;

impl MatchScorer {
    /// Compute strength, coverage and score for an explicit matched set.
    ///
    /// `matched` is treated as a set: duplicates are ignored. An empty
    /// `matched` collection always yields a zero breakdown.
    #[must_use]
    pub fn breakdown<'a, I>(
        matched: I,
        total_trail_categories: usize,
        weights: &WeightTable,
    ) -> MatchBreakdown
    where
        I: IntoIterator<Item = &'a str>,
    {
        let matched: BTreeSet<&str> = matched.into_iter().collect();
        if matched.is_empty() {
            return MatchBreakdown::default();
        }

        let strength_sum: u32 = matched
            .iter()
            .map(|category| u32::from(weights.weight(category)))
            .sum();
        let strength = ratio(strength_sum, u32::from(weights.max_score()));
        let coverage = ratio(
            u32::try_from(matched.len()).unwrap_or(u32::MAX),
            u32::try_from(total_trail_categories).unwrap_or(u32::MAX),
        );
        MatchBreakdown {
            strength,
            coverage,
            score: <Self as Scorer>::sanitise(blend(strength, coverage)),
        }
    }

    /// Breakdown for a trail whose full category set is `categories`.
    ///
    /// The matched set is the subset of `categories` with positive weight.
    #[must_use]
    pub fn breakdown_for(categories: &CategorySet, weights: &WeightTable) -> MatchBreakdown {
        Self::breakdown(
            categories
                .iter()
                .map(String::as_str)
                .filter(|category| weights.is_weighted(category)),
            categories.len(),
            weights,
        )
    }
}

impl Scorer for MatchScorer {
    fn score(&self, categories: &CategorySet, weights: &WeightTable) -> f32 {
        Self::breakdown_for(categories, weights).score
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "score blending requires a weighted sum"
)]
fn blend(strength: f32, coverage: f32) -> f32 {
    STRENGTH_WEIGHT * strength + COVERAGE_WEIGHT * coverage
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "ratios of small category counts and weight sums"
)]
fn ratio(numerator: u32, denominator: u32) -> f32 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f32 / denominator as f32
}
