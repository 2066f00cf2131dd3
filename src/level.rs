//! Bounded scales shared across the curriculum model: the 0..=10 skill
//! mastery ladder, the per-learner level mapping built on it, and the
//! three course difficulty tiers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::TrajectoryError;

/// A skill mastery level on the fixed 0..=10 ladder.
///
/// 0 means no exposure, 10 means mastery. Comparisons are by integer value
/// only; construction from out-of-range integers fails, including through
/// serde.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct SkillLevel(u8);

impl SkillLevel {
    /// No exposure.
    pub const MIN: Self = Self(0);
    /// Mastery.
    pub const MAX: Self = Self(10);

    /// Create a level, rejecting values above [`SkillLevel::MAX`].
    pub fn new(value: u8) -> Result<Self, TrajectoryError> {
        Self::try_from(value)
    }

    /// Create a level from an unbounded value, capping at [`SkillLevel::MAX`].
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > Self::MAX.0 {
            Self::MAX
        } else {
            Self(value)
        }
    }

    /// The raw integer value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Human-readable descriptor for the level.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self.0 {
            0 => "no exposure",
            1 => "novice",
            2 => "elementary",
            3 => "pre-intermediate",
            4 => "intermediate",
            5 => "upper-intermediate",
            6 => "advanced",
            7 => "proficient",
            8 => "expert",
            9 => "master",
            _ => "grandmaster",
        }
    }
}

impl TryFrom<u8> for SkillLevel {
    type Error = TrajectoryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > Self::MAX.0 {
            return Err(TrajectoryError::InvalidCatalog(format!(
                "skill level {value} outside 0..=10"
            )));
        }
        Ok(Self(value))
    }
}

impl From<SkillLevel> for u8 {
    fn from(level: SkillLevel) -> Self {
        level.0
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-learner skill levels keyed by skill code. Codes never seen read
/// as level 0, and stored levels only ever move up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillLevels(BTreeMap<String, SkillLevel>);

impl SkillLevels {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current level for a skill code; unknown codes are level 0.
    #[must_use]
    pub fn get(&self, code: &str) -> SkillLevel {
        self.0.get(code).copied().unwrap_or(SkillLevel::MIN)
    }

    /// Raise a skill to `level` when that is strictly higher than the
    /// stored value. Returns whether the stored level changed.
    pub fn raise_to(&mut self, code: &str, level: SkillLevel) -> bool {
        if level > self.get(code) {
            self.0.insert(code.to_string(), level);
            true
        } else {
            false
        }
    }

    /// Number of skills the learner has any exposure to.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Plain-integer snapshot for display and persistence.
    #[must_use]
    pub fn profile(&self) -> BTreeMap<String, u8> {
        self.0
            .iter()
            .map(|(code, level)| (code.clone(), level.value()))
            .collect()
    }
}

impl FromIterator<(String, SkillLevel)> for SkillLevels {
    fn from_iter<I: IntoIterator<Item = (String, SkillLevel)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Course difficulty tier, resolved per-student per-course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}
