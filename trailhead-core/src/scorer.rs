//! The scoring seam between categorisation and search.
//!
//! Categorisation reduces a trail to a [`CategorySet`]; a visitor's
//! preferences reduce to a [`WeightTable`]. A [`Scorer`] turns the pair into
//! the match score that search orders by.

use crate::{CategorySet, WeightTable};

/// Rates how well a trail's categories suit one visitor.
///
/// A score of `1.0` means every category the visitor weights is present and
/// nothing else is; `0.0` means none of the trail's categories carry weight.
/// Trails with no categories and tables with no weight both score `0.0`.
///
/// Scores are recomputed for every trail whenever preferences change, so a
/// scorer is shared across annotation threads and must be `Send + Sync`.
/// Pass raw results through [`Scorer::sanitise`] before returning them.
///
/// # Examples
///
/// ```rust
/// use trailhead_core::{CategorySet, Scorer, WeightTable};
///
/// /// Scores a trail by whether it has any weighted category at all.
/// struct AnyWeighted;
///
/// impl Scorer for AnyWeighted {
///     fn score(&self, categories: &CategorySet, weights: &WeightTable) -> f32 {
///         let hit = categories.iter().any(|category| weights.weight(category) > 0);
///         if hit { 1.0 } else { 0.0 }
///     }
/// }
///
/// let categories = CategorySet::from(["Forest".to_owned()]);
/// assert_eq!(AnyWeighted.score(&categories, &WeightTable::default()), 0.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Match score for a trail carrying `categories` under `weights`.
    fn score(&self, categories: &CategorySet, weights: &WeightTable) -> f32;

    /// Force `score` into `0.0..=1.0`; `NaN` and infinities become `0.0`.
    fn sanitise(score: f32) -> f32
    where
        Self: Sized,
    {
        if score.is_finite() {
            score.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Fixed;

    impl Scorer for Fixed {
        fn score(&self, _categories: &CategorySet, _weights: &WeightTable) -> f32 {
            0.5
        }
    }

    #[rstest]
    #[case(0.25, 0.25)]
    #[case(-0.5, 0.0)]
    #[case(1.5, 1.0)]
    #[case(f32::NAN, 0.0)]
    #[case(f32::INFINITY, 0.0)]
    #[expect(clippy::float_cmp, reason = "clamped values are exact")]
    fn sanitise_bounds_scores(#[case] raw: f32, #[case] expected: f32) {
        assert_eq!(Fixed::sanitise(raw), expected);
    }
}
