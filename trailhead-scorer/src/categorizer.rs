//! Derive trail categories from descriptive text.
//!
//! A trail belongs to a category when any of the category's keywords occurs
//! anywhere in the trail's lower-cased name, description or translation.
//! Matching is plain substring search: `"bush"` matches inside `"bushfire"`
//! and `"lake"` inside `"flakey"`. This is a known imprecision of the keyword
//! dictionaries and is preserved so results stay stable.

#![forbid(unsafe_code)]

use aho_corasick::{AhoCorasick, MatchKind};
use trailhead_core::{CategoryDictionary, CategorySet, Trail};

use crate::CategorizerError;

/// Categorise `trail` by scanning every keyword in `dictionary`.
///
/// This is the reference behaviour; [`KeywordCategorizer`] produces the same
/// sets with one pass over the text and should be preferred for bulk work.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use trailhead_core::{CategoryDictionary, Trail};
/// use trailhead_scorer::categorize;
///
/// let dictionary = CategoryDictionary::new(BTreeMap::from([
///     ("Alpine".to_owned(), vec!["mountain".to_owned()]),
/// ])).expect("valid dictionary");
/// let trail = Trail::new(1, "Mountain Hut Walk");
///
/// assert!(categorize(&trail, &dictionary).contains("Alpine"));
/// ```
#[must_use]
pub fn categorize(trail: &Trail, dictionary: &CategoryDictionary) -> CategorySet {
    let haystack = trail.search_text();
    if haystack.is_empty() {
        return CategorySet::new();
    }
    dictionary
        .iter()
        .filter(|(_, keywords)| {
            keywords
                .iter()
                .any(|keyword| haystack.contains(keyword.to_lowercase().as_str()))
        })
        .map(|(category, _)| category.to_owned())
        .collect()
}

/// Precompiled multi-keyword matcher over a category dictionary.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use trailhead_core::{CategoryDictionary, Trail};
/// use trailhead_scorer::KeywordCategorizer;
///
/// # fn main() -> Result<(), trailhead_scorer::CategorizerError> {
/// let dictionary = CategoryDictionary::new(BTreeMap::from([
///     ("Forest".to_owned(), vec!["forest".to_owned(), "bush".to_owned()]),
///     ("Alpine".to_owned(), vec!["mountain".to_owned()]),
/// ])).expect("valid dictionary");
/// let categorizer = KeywordCategorizer::new(&dictionary)?;
/// let trail = Trail::new(1, "A forest walk near the mountain");
///
/// let categories = categorizer.categorize(&trail);
/// assert_eq!(categories.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct KeywordCategorizer {
    automaton: AhoCorasick,
    owners: Vec<usize>,
    categories: Vec<String>,
}

impl KeywordCategorizer {
    /// Compile `dictionary` into a matcher.
    ///
    /// # Errors
    /// Returns [`CategorizerError::Build`] when the keyword set exceeds the
    /// automaton's limits.
    pub fn new(dictionary: &CategoryDictionary) -> Result<Self, CategorizerError> {
        let mut categories = Vec::with_capacity(dictionary.len());
        let mut patterns = Vec::new();
        let mut owners = Vec::new();
        for (owner, (category, keywords)) in dictionary.iter().enumerate() {
            categories.push(category.to_owned());
            for keyword in keywords {
                patterns.push(keyword.to_lowercase());
                owners.push(owner);
            }
        }

        // Overlapping search needs standard match semantics.
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&patterns)
            .map_err(|source| CategorizerError::Build {
                patterns: patterns.len(),
                source,
            })?;

        Ok(Self {
            automaton,
            owners,
            categories,
        })
    }

    /// Categories whose keywords occur in the trail's descriptive text.
    #[must_use]
    pub fn categorize(&self, trail: &Trail) -> CategorySet {
        self.categorize_haystack(&trail.search_text())
    }

    /// Categories whose keywords occur in arbitrary `text`.
    #[must_use]
    pub fn categorize_text(&self, text: &str) -> CategorySet {
        self.categorize_haystack(&text.to_lowercase())
    }

    /// Number of categories known to the matcher.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    fn categorize_haystack(&self, haystack: &str) -> CategorySet {
        if haystack.is_empty() || self.categories.is_empty() {
            return CategorySet::new();
        }

        let mut hits = vec![false; self.categories.len()];
        let mut remaining = self.categories.len();
        for found in self.automaton.find_overlapping_iter(haystack) {
            let owner = self.owners.get(found.pattern().as_usize()).copied();
            if let Some(hit) = owner.and_then(|index| hits.get_mut(index))
                && !*hit
            {
                *hit = true;
                remaining = remaining.saturating_sub(1);
                if remaining == 0 {
                    break;
                }
            }
        }

        self.categories
            .iter()
            .zip(hits)
            .filter_map(|(category, hit)| hit.then(|| category.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use trailhead_core::test_support::dictionary;

    #[fixture]
    fn sample_dictionary() -> CategoryDictionary {
        dictionary(&[
            ("Forest", &["forest", "bush"]),
            ("Alpine", &["mountain"]),
            ("Wet", &["lake", "river"]),
        ])
    }

    #[fixture]
    fn categorizer(sample_dictionary: CategoryDictionary) -> KeywordCategorizer {
        KeywordCategorizer::new(&sample_dictionary).expect("compile dictionary")
    }

    fn names(set: &CategorySet) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    #[rstest]
    #[case("A beautiful alpine trail", &[])]
    #[case("A beautiful MOUNTAIN trail", &["Alpine"])]
    #[case("A forest walk near the mountain", &["Alpine", "Forest"])]
    #[case("Bushfire recovery area", &["Forest"])]
    #[case("Riverside forest by the lake", &["Forest", "Wet"])]
    #[case("", &[])]
    fn matches_keywords_as_substrings(
        categorizer: KeywordCategorizer,
        #[case] name: &str,
        #[case] expected: &[&str],
    ) {
        let trail = Trail::new(1, name);
        assert_eq!(names(&categorizer.categorize(&trail)), expected);
    }

    #[rstest]
    fn searches_description_and_translation(categorizer: KeywordCategorizer) {
        let trail = Trail::new(1, "Track 12")
            .with_description("Climbs steadily")
            .with_translation("He awa, he ROTO, he maunga, he river");
        assert_eq!(names(&categorizer.categorize(&trail)), vec!["Wet"]);
    }

    #[rstest]
    fn keywords_are_matched_case_insensitively() {
        let categorizer = KeywordCategorizer::new(&dictionary(&[("Beach", &["Coastal"])]))
            .expect("compile dictionary");
        assert_eq!(
            names(&categorizer.categorize_text("Wild COASTAL cliffs")),
            vec!["Beach"]
        );
    }

    #[rstest]
    fn overlapping_keywords_report_every_category() {
        let dictionary = dictionary(&[("Forest", &["bush"]), ("Tramping", &["bushwalk"])]);
        let categorizer = KeywordCategorizer::new(&dictionary).expect("compile dictionary");
        let trail = Trail::new(1, "Easy bushwalk");
        assert_eq!(
            names(&categorizer.categorize(&trail)),
            vec!["Forest", "Tramping"]
        );
    }

    #[rstest]
    fn empty_dictionary_never_matches() {
        let categorizer =
            KeywordCategorizer::new(&CategoryDictionary::empty()).expect("compile dictionary");
        assert!(categorizer.categorize_text("forest lake mountain").is_empty());
        assert_eq!(categorizer.category_count(), 0);
    }

    #[rstest]
    fn naive_scan_agrees_with_automaton(
        sample_dictionary: CategoryDictionary,
        categorizer: KeywordCategorizer,
    ) {
        let trail = Trail::new(4, "Lakeside bush loop").with_description("Mountain views");
        assert_eq!(
            categorize(&trail, &sample_dictionary),
            categorizer.categorize(&trail)
        );
    }
}
