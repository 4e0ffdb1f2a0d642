//! Sort keys, their comparators and the trails each key excludes.
//!
//! Choosing a sort key changes membership as well as order: time ordering
//! drops trails with no known duration and difficulty ordering drops trails
//! whose difficulty is `unknown`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use log::warn;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use trailhead_core::{ScoredTrail, Trail};

use crate::labels::eq_ignore_case;

/// Difficulty tiers from easiest to hardest.
pub const DIFFICULTY_ORDER: [&str; 5] = ["easiest", "easy", "intermediate", "advanced", "expert"];

/// Difficulty value excluded from difficulty ordering.
pub const UNKNOWN_DIFFICULTY: &str = "unknown";

/// Rank of `difficulty` in [`DIFFICULTY_ORDER`], or `u8::MAX` when absent.
///
/// # Examples
/// ```
/// use trailhead_search::difficulty_rank;
///
/// assert_eq!(difficulty_rank("Easy"), 1);
/// assert_eq!(difficulty_rank("grade 5"), u8::MAX);
/// ```
#[must_use]
pub fn difficulty_rank(difficulty: &str) -> u8 {
    DIFFICULTY_ORDER
        .iter()
        .position(|tier| eq_ignore_case(tier, difficulty.trim()))
        .and_then(|rank| u8::try_from(rank).ok())
        .unwrap_or(u8::MAX)
}

/// How results are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase", from = "String"))]
pub enum SortKey {
    /// Case-insensitive trail name.
    #[default]
    Name,
    /// Average completion time.
    Time,
    /// Difficulty tier.
    Difficulty,
    /// Match score, best first.
    Match,
}

impl SortKey {
    /// Every sort key.
    pub const ALL: [Self; 4] = [Self::Name, Self::Time, Self::Difficulty, Self::Match];

    /// Stable wire identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Time => "time",
            Self::Difficulty => "difficulty",
            Self::Match => "match",
        }
    }

    /// Parse `key`, falling back to [`SortKey::Name`] for unknown input.
    ///
    /// # Examples
    /// ```
    /// use trailhead_search::SortKey;
    ///
    /// assert_eq!(SortKey::parse_or_default("MATCH"), SortKey::Match);
    /// assert_eq!(SortKey::parse_or_default("distance"), SortKey::Name);
    /// ```
    #[must_use]
    pub fn parse_or_default(key: &str) -> Self {
        key.parse().unwrap_or_else(|err| {
            warn!("{err}; sorting by name");
            Self::default()
        })
    }

    /// Whether `trail` takes part in results ordered by this key.
    #[must_use]
    pub fn admits(self, trail: &Trail) -> bool {
        match self {
            Self::Time => !trail.has_no_duration(),
            Self::Difficulty => !eq_ignore_case(trail.difficulty.trim(), UNKNOWN_DIFFICULTY),
            Self::Name | Self::Match => true,
        }
    }

    /// Total order for this key.
    ///
    /// Ties on the key fall back to case-insensitive name and then to id,
    /// so reversing the direction reverses the order exactly.
    #[must_use]
    pub fn compare(self, left: &ScoredTrail, right: &ScoredTrail, ascending: bool) -> Ordering {
        let ordering = self
            .base_order(left, right)
            .then_with(|| compare_names(&left.trail().name, &right.trail().name))
            .then_with(|| left.trail().id.cmp(&right.trail().id));
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    }

    fn base_order(self, left: &ScoredTrail, right: &ScoredTrail) -> Ordering {
        let (a, b) = (left.trail(), right.trail());
        match self {
            Self::Name => Ordering::Equal,
            Self::Time => a.average_minutes().total_cmp(&b.average_minutes()),
            Self::Difficulty => difficulty_rank(&a.difficulty).cmp(&difficulty_rank(&b.difficulty)),
            Self::Match => right.match_score().total_cmp(&left.match_score()),
        }
    }
}

impl From<String> for SortKey {
    fn from(key: String) -> Self {
        Self::parse_or_default(&key)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown sort key: {s}"))
    }
}

fn compare_names(left: &str, right: &str) -> Ordering {
    left.chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase))
}
