//! Course catalog entries: what a course demands before enrollment and
//! what it produces at each difficulty tier.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::DifficultyBands;
use crate::level::{Difficulty, SkillLevel, SkillLevels};

/// A minimum-level gate on one skill.
///
/// Used both as a course prerequisite and as a program graduation target.
/// `weight` only influences recommendation scoring, never satisfaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRequirement {
    pub skill: String,
    pub level: SkillLevel,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl SkillRequirement {
    pub fn new(skill: impl Into<String>, level: SkillLevel, weight: f64) -> Self {
        Self {
            skill: skill.into(),
            level,
            weight,
        }
    }

    /// Satisfied iff the learner's current level meets the gate.
    #[must_use]
    pub fn is_satisfied_by(&self, current: SkillLevel) -> bool {
        current >= self.level
    }
}

const fn default_weight() -> f64 {
    1.0
}

/// How much one course completion can raise one skill.
///
/// The realized increment scales with performance and is capped so the
/// learner never passes `ceiling` through this gain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGain {
    pub skill: String,
    pub base_gain: u8,
    pub ceiling: SkillLevel,
}

impl SkillGain {
    pub fn new(skill: impl Into<String>, base_gain: u8, ceiling: SkillLevel) -> Self {
        Self {
            skill: skill.into(),
            base_gain,
            ceiling,
        }
    }

    /// Realized level increment for a learner at `current` with the given
    /// performance in [0, 1]: `floor(base_gain * performance)`, capped at
    /// the ceiling, and 0 once the ceiling is already reached.
    #[must_use]
    pub fn realized(&self, current: SkillLevel, performance: f64) -> u8 {
        if current >= self.ceiling {
            return 0;
        }
        let earned = (f64::from(self.base_gain) * performance).floor() as u8;
        let reached = SkillLevel::clamped(current.value().saturating_add(earned)).min(self.ceiling);
        reached.value() - current.value()
    }
}

/// A static catalog course. Difficulty-dependent gains live in `gains`;
/// courses with `adaptive` unset always run at Intermediate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub elective: bool,
    pub semester: u32,
    #[serde(default)]
    pub credits: u32,
    #[serde(default)]
    pub prerequisites: Vec<SkillRequirement>,
    #[serde(default)]
    pub gains: BTreeMap<Difficulty, Vec<SkillGain>>,
    #[serde(default = "default_adaptive")]
    pub adaptive: bool,
}

const fn default_adaptive() -> bool {
    true
}

impl Course {
    /// Pick the difficulty tier this learner would take the course at.
    ///
    /// Non-adaptive courses are always Intermediate. Adaptive courses
    /// compare the learner's summed prerequisite levels against the summed
    /// required levels: no prerequisites means Beginner, otherwise the
    /// ratio lands in one of the configured bands. Never cached; the
    /// answer changes as the learner's skills grow.
    #[must_use]
    pub fn resolve_difficulty(&self, skills: &SkillLevels, bands: &DifficultyBands) -> Difficulty {
        if !self.adaptive {
            return Difficulty::Intermediate;
        }

        let mut total_score = 0u32;
        let mut max_score = 0u32;
        for req in &self.prerequisites {
            total_score += u32::from(skills.get(&req.skill).value());
            max_score += u32::from(req.level.value());
        }

        if max_score == 0 {
            return Difficulty::Beginner;
        }

        let ratio = f64::from(total_score) / f64::from(max_score);
        if ratio < bands.beginner_below {
            Difficulty::Beginner
        } else if ratio < bands.advanced_at {
            Difficulty::Intermediate
        } else {
            Difficulty::Advanced
        }
    }

    /// Gains granted at one difficulty tier; empty when none are declared.
    #[must_use]
    pub fn gains_for(&self, difficulty: Difficulty) -> &[SkillGain] {
        self.gains
            .get(&difficulty)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// True iff every prerequisite gate passes at the learner's current
    /// levels.
    #[must_use]
    pub fn prerequisites_met(&self, skills: &SkillLevels) -> bool {
        self.prerequisites
            .iter()
            .all(|req| req.is_satisfied_by(skills.get(&req.skill)))
    }
}
