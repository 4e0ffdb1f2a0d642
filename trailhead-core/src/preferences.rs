//! User preference vectors.
//!
//! A visitor rates ten trail traits on an ordinal scale from 0 (not
//! interested) to [`MAX_LEVEL`] and toggles two accessibility flags.

use std::fmt;
use std::str::FromStr;

use log::warn;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest ordinal preference level.
pub const MAX_LEVEL: u8 = 5;

/// Ordinal preference dimensions a visitor can rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PreferenceDimension {
    /// Appetite for challenging, experienced-only trails.
    Experience,
    /// Tolerance for steep or rocky gradients.
    Gradient,
    /// Native bush and forest.
    Bush,
    /// Nature reserves and parks.
    Reserve,
    /// Lakes and rivers.
    LakeRiver,
    /// Beaches and coastline.
    Coast,
    /// Alpine and mountain terrain.
    Mountain,
    /// Wildlife spotting.
    Wildlife,
    /// Historic sites.
    Historic,
    /// Waterfalls.
    Waterfall,
}

impl PreferenceDimension {
    /// Every dimension in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Experience,
        Self::Gradient,
        Self::Bush,
        Self::Reserve,
        Self::LakeRiver,
        Self::Coast,
        Self::Mountain,
        Self::Wildlife,
        Self::Historic,
        Self::Waterfall,
    ];

    /// Return the dimension as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use trailhead_core::PreferenceDimension;
    ///
    /// assert_eq!(PreferenceDimension::LakeRiver.as_str(), "lake_river");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Experience => "experience",
            Self::Gradient => "gradient",
            Self::Bush => "bush",
            Self::Reserve => "reserve",
            Self::LakeRiver => "lake_river",
            Self::Coast => "coast",
            Self::Mountain => "mountain",
            Self::Wildlife => "wildlife",
            Self::Historic => "historic",
            Self::Waterfall => "waterfall",
        }
    }
}

impl fmt::Display for PreferenceDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferenceDimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|dimension| dimension.as_str() == wanted)
            .ok_or_else(|| format!("unknown preference dimension '{s}'"))
    }
}

/// Boolean accessibility preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PreferenceFlag {
    /// Trails suitable for families with children.
    FamilyFriendly,
    /// Trails with step-free or wheelchair access.
    Accessible,
}

impl PreferenceFlag {
    /// Every flag in declaration order.
    pub const ALL: [Self; 2] = [Self::FamilyFriendly, Self::Accessible];
}

/// A visitor's preference vector.
///
/// Levels are clamped into `0..=MAX_LEVEL` on every write, including
/// deserialisation.
///
/// # Examples
/// ```
/// use trailhead_core::{PreferenceDimension, PreferenceFlag, UserPreferences};
///
/// let prefs = UserPreferences::new()
///     .with_level(PreferenceDimension::Mountain, 4)
///     .with_flag(PreferenceFlag::Accessible, true);
/// assert_eq!(prefs.level(PreferenceDimension::Mountain), 4);
/// assert!(prefs.flag(PreferenceFlag::Accessible));
/// assert!(!prefs.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "PreferenceRecord", into = "PreferenceRecord")
)]
pub struct UserPreferences {
    levels: [u8; 10],
    family_friendly: bool,
    accessible: bool,
}

impl UserPreferences {
    /// Construct a vector with every level at zero and both flags unset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            levels: [0; 10],
            family_friendly: false,
            accessible: false,
        }
    }

    /// Level recorded for `dimension`.
    #[must_use]
    pub fn level(&self, dimension: PreferenceDimension) -> u8 {
        self.levels
            .get(Self::slot(dimension))
            .copied()
            .unwrap_or_default()
    }

    /// Record a level for `dimension`, clamping to [`MAX_LEVEL`].
    pub fn set_level(&mut self, dimension: PreferenceDimension, level: u8) {
        if level > MAX_LEVEL {
            warn!("clamping {dimension} preference level {level} to {MAX_LEVEL}");
        }
        if let Some(slot) = self.levels.get_mut(Self::slot(dimension)) {
            *slot = level.min(MAX_LEVEL);
        }
    }

    /// Record a level while returning `self` for chaining.
    #[must_use]
    pub fn with_level(mut self, dimension: PreferenceDimension, level: u8) -> Self {
        self.set_level(dimension, level);
        self
    }

    /// Value recorded for `flag`.
    #[must_use]
    pub const fn flag(&self, flag: PreferenceFlag) -> bool {
        match flag {
            PreferenceFlag::FamilyFriendly => self.family_friendly,
            PreferenceFlag::Accessible => self.accessible,
        }
    }

    /// Record a flag value.
    pub const fn set_flag(&mut self, flag: PreferenceFlag, value: bool) {
        match flag {
            PreferenceFlag::FamilyFriendly => self.family_friendly = value,
            PreferenceFlag::Accessible => self.accessible = value,
        }
    }

    /// Record a flag while returning `self` for chaining.
    #[must_use]
    pub const fn with_flag(mut self, flag: PreferenceFlag, value: bool) -> Self {
        self.set_flag(flag, value);
        self
    }

    /// Report whether every level is zero and both flags are unset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(|level| *level == 0) && !self.family_friendly && !self.accessible
    }

    fn slot(dimension: PreferenceDimension) -> usize {
        dimension as usize
    }
}

/// Wire form of [`UserPreferences`] with one named field per dimension.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PreferenceRecord {
    experience: u8,
    gradient: u8,
    bush: u8,
    reserve: u8,
    lake_river: u8,
    coast: u8,
    mountain: u8,
    wildlife: u8,
    historic: u8,
    waterfall: u8,
    family_friendly: bool,
    accessible: bool,
}

#[cfg(feature = "serde")]
impl From<PreferenceRecord> for UserPreferences {
    fn from(record: PreferenceRecord) -> Self {
        let levels = [
            (PreferenceDimension::Experience, record.experience),
            (PreferenceDimension::Gradient, record.gradient),
            (PreferenceDimension::Bush, record.bush),
            (PreferenceDimension::Reserve, record.reserve),
            (PreferenceDimension::LakeRiver, record.lake_river),
            (PreferenceDimension::Coast, record.coast),
            (PreferenceDimension::Mountain, record.mountain),
            (PreferenceDimension::Wildlife, record.wildlife),
            (PreferenceDimension::Historic, record.historic),
            (PreferenceDimension::Waterfall, record.waterfall),
        ];
        levels
            .into_iter()
            .fold(Self::new(), |prefs, (dimension, level)| {
                prefs.with_level(dimension, level)
            })
            .with_flag(PreferenceFlag::FamilyFriendly, record.family_friendly)
            .with_flag(PreferenceFlag::Accessible, record.accessible)
    }
}

#[cfg(feature = "serde")]
impl From<UserPreferences> for PreferenceRecord {
    fn from(prefs: UserPreferences) -> Self {
        Self {
            experience: prefs.level(PreferenceDimension::Experience),
            gradient: prefs.level(PreferenceDimension::Gradient),
            bush: prefs.level(PreferenceDimension::Bush),
            reserve: prefs.level(PreferenceDimension::Reserve),
            lake_river: prefs.level(PreferenceDimension::LakeRiver),
            coast: prefs.level(PreferenceDimension::Coast),
            mountain: prefs.level(PreferenceDimension::Mountain),
            wildlife: prefs.level(PreferenceDimension::Wildlife),
            historic: prefs.level(PreferenceDimension::Historic),
            waterfall: prefs.level(PreferenceDimension::Waterfall),
            family_friendly: prefs.flag(PreferenceFlag::FamilyFriendly),
            accessible: prefs.flag(PreferenceFlag::Accessible),
        }
    }
}
