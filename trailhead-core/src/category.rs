//! Keyword dictionaries describing trail categories.
//!
//! A dictionary maps each category name to the keywords whose presence in a
//! trail's text places the trail in that category.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by [`CategoryDictionary::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CategoryDictionaryError {
    /// A category name was empty or whitespace.
    #[error("category names must not be blank")]
    BlankCategory,
    /// A category had no keywords.
    #[error("category '{category}' must have at least one keyword")]
    NoKeywords {
        /// Offending category name.
        category: String,
    },
    /// A keyword was empty or whitespace.
    #[error("category '{category}' contains a blank keyword")]
    BlankKeyword {
        /// Category that owns the blank keyword.
        category: String,
    },
}

/// Validated mapping of category name to ordered keyword list.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use trailhead_core::CategoryDictionary;
///
/// # fn main() -> Result<(), trailhead_core::CategoryDictionaryError> {
/// let dictionary = CategoryDictionary::new(BTreeMap::from([
///     ("Forest".to_owned(), vec!["forest".to_owned(), "bush".to_owned()]),
///     ("Alpine".to_owned(), vec!["mountain".to_owned()]),
/// ]))?;
/// assert_eq!(dictionary.len(), 2);
/// assert_eq!(dictionary.keywords("Alpine"), Some(&["mountain".to_owned()][..]));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "BTreeMap<String, Vec<String>>", into = "BTreeMap<String, Vec<String>>")
)]
pub struct CategoryDictionary {
    entries: BTreeMap<String, Vec<String>>,
}

impl CategoryDictionary {
    /// Validate and construct a dictionary.
    ///
    /// # Errors
    /// Returns [`CategoryDictionaryError`] when a category name is blank, a
    /// category has no keywords, or a keyword is blank.
    pub fn new(entries: BTreeMap<String, Vec<String>>) -> Result<Self, CategoryDictionaryError> {
        for (category, keywords) in &entries {
            if category.trim().is_empty() {
                return Err(CategoryDictionaryError::BlankCategory);
            }
            if keywords.is_empty() {
                return Err(CategoryDictionaryError::NoKeywords {
                    category: category.clone(),
                });
            }
            if keywords.iter().any(|keyword| keyword.trim().is_empty()) {
                return Err(CategoryDictionaryError::BlankKeyword {
                    category: category.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Construct an empty dictionary, under which no trail has categories.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Keywords for `category`, if the category exists.
    #[must_use]
    pub fn keywords(&self, category: &str) -> Option<&[String]> {
        self.entries.get(category).map(Vec::as_slice)
    }

    /// Iterate over categories and their keywords in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(category, keywords)| (category.as_str(), keywords.as_slice()))
    }

    /// Iterate over category names in name order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the dictionary has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<BTreeMap<String, Vec<String>>> for CategoryDictionary {
    type Error = CategoryDictionaryError;

    fn try_from(entries: BTreeMap<String, Vec<String>>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<CategoryDictionary> for BTreeMap<String, Vec<String>> {
    fn from(dictionary: CategoryDictionary) -> Self {
        dictionary.entries
    }
}
