//! Per-category preference weights.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Mapping of category name to a weight in `0..=5`, plus the cached sum of
/// all weights.
///
/// A table is built in one step from a complete set of weights and is never
/// edited afterwards, so the cached maximum always matches its entries.
///
/// # Examples
/// ```
/// use trailhead_core::WeightTable;
///
/// let table = WeightTable::from_weights([("Forest", 4), ("Alpine", 4)]);
/// assert_eq!(table.max_score(), 8);
/// assert_eq!(table.weight("Forest"), 4);
/// assert_eq!(table.weight("Beach"), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct WeightTable {
    weights: BTreeMap<String, u8>,
    max_score: u16,
}

impl WeightTable {
    /// Build a table from `(category, weight)` pairs.
    ///
    /// Later duplicates replace earlier ones.
    #[must_use]
    pub fn from_weights<I, S>(weights: I) -> Self
    where
        I: IntoIterator<Item = (S, u8)>,
        S: Into<String>,
    {
        let weights: BTreeMap<String, u8> = weights
            .into_iter()
            .map(|(category, weight)| (category.into(), weight))
            .collect();
        let max_score = weights.values().copied().map(u16::from).sum();
        Self { weights, max_score }
    }

    /// Weight for `category`, or zero when the category is unknown.
    #[must_use]
    pub fn weight(&self, category: &str) -> u8 {
        self.weights.get(category).copied().unwrap_or_default()
    }

    /// Report whether `category` contributes a positive weight.
    #[must_use]
    pub fn is_weighted(&self, category: &str) -> bool {
        self.weight(category) > 0
    }

    /// Sum of every weight in the table.
    #[must_use]
    pub const fn max_score(&self) -> u16 {
        self.max_score
    }

    /// Iterate over categories and weights in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.weights
            .iter()
            .map(|(category, weight)| (category.as_str(), *weight))
    }

    /// Number of categories in the table, including zero weights.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Report whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_table_has_zero_maximum() {
        let table = WeightTable::default();
        assert_eq!(table.max_score(), 0);
        assert!(!table.is_weighted("Forest"));
    }

    #[rstest]
    fn zero_weights_are_kept_but_not_weighted() {
        let table = WeightTable::from_weights([("Beach", 0), ("Wet", 3)]);
        assert_eq!(table.len(), 2);
        assert!(!table.is_weighted("Beach"));
        assert!(table.is_weighted("Wet"));
        assert_eq!(table.max_score(), 3);
    }

    #[rstest]
    fn duplicates_keep_the_last_weight() {
        let table = WeightTable::from_weights([("Wet", 5), ("Wet", 1)]);
        assert_eq!(table.weight("Wet"), 1);
        assert_eq!(table.max_score(), 1);
    }
}
