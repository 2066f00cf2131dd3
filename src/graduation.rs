//! Graduation readiness: which target requirements a learner still
//! misses, and how close they are in percent.
//!
//! Evaluation is a pure function of program targets and current skill
//! levels, so the same entry point serves both the learner's own program
//! and what-if comparisons against alternatives.

use serde::{Deserialize, Serialize};

use crate::catalog::{Program, SkillRequirement};
use crate::level::SkillLevels;

/// Outcome of evaluating one program's graduation targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessReport {
    /// True iff every target requirement is satisfied.
    pub ready: bool,
    /// Share of satisfied targets in [0, 100]; 100.0 for a program with
    /// no targets.
    pub percentage: f64,
    /// Unmet targets in declaration order.
    pub missing: Vec<SkillRequirement>,
}

/// Evaluate graduation targets against current skill levels.
#[must_use]
pub fn evaluate(program: &Program, skills: &SkillLevels) -> ReadinessReport {
    let missing: Vec<SkillRequirement> = program
        .target_skills
        .iter()
        .filter(|req| !req.is_satisfied_by(skills.get(&req.skill)))
        .cloned()
        .collect();

    let total = program.target_skills.len();
    let percentage = if total == 0 {
        100.0
    } else {
        ((total - missing.len()) as f64 / total as f64) * 100.0
    };

    ReadinessReport {
        ready: missing.is_empty(),
        percentage,
        missing,
    }
}
