//! Course recommendation: rank the courses a learner could take next by
//! how well their skill gains close the remaining graduation gaps.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Course, Curriculum, SkillRequirement};
use crate::error::Result;
use crate::graduation;
use crate::progression::StudentProgression;

/// One ranked course suggestion.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation<'a> {
    pub course: &'a Course,
    pub relevance: f64,
}

/// Rank a semester's eligible courses for one learner, most relevant
/// first, at most `limit` entries (the configured default when `None`).
///
/// Candidates are the program's required and elective courses scheduled
/// for `semester`, minus completed courses and courses with unmet
/// prerequisites. With no missing graduation skills every candidate gets
/// the flat baseline relevance; otherwise a candidate scores the sum of
/// `weight * min(ceiling - current, base_gain)` over its gains (at the
/// difficulty the learner would take it) that match a missing target.
/// The sort is stable, so equal scores keep enumeration order, required
/// courses before electives.
pub fn recommend<'a>(
    curriculum: &'a Curriculum,
    student: &StudentProgression,
    semester: u32,
    limit: Option<usize>,
) -> Result<Vec<Recommendation<'a>>> {
    let program = curriculum.program(&student.program)?;
    let limit = limit.unwrap_or(curriculum.config().recommendation.default_limit);
    let missing = graduation::evaluate(program, student.skills()).missing;

    let offerings = curriculum.semester_offerings(program, semester);
    let mut ranked: Vec<Recommendation<'a>> = offerings
        .all()
        .filter(|course| !student.has_completed(&course.code))
        .filter(|course| course.prerequisites_met(student.skills()))
        .map(|course| Recommendation {
            course,
            relevance: relevance(curriculum, student, course, &missing),
        })
        .collect();

    ranked.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
    ranked.truncate(limit);

    debug!(
        student = %student.student_id,
        semester,
        missing = missing.len(),
        recommended = ranked.len(),
        "courses ranked"
    );
    Ok(ranked)
}

/// Score one candidate against the learner's missing targets.
fn relevance(
    curriculum: &Curriculum,
    student: &StudentProgression,
    course: &Course,
    missing: &[SkillRequirement],
) -> f64 {
    if missing.is_empty() {
        return curriculum.config().recommendation.baseline_relevance;
    }

    let difficulty =
        course.resolve_difficulty(student.skills(), &curriculum.config().difficulty);

    let mut score = 0.0;
    for gain in course.gains_for(difficulty) {
        let Some(req) = missing.iter().find(|req| req.skill == gain.skill) else {
            continue;
        };
        let current = student.skills().get(&gain.skill);
        let potential = (f64::from(gain.ceiling.value()) - f64::from(current.value()))
            .min(f64::from(gain.base_gain));
        score += req.weight * potential;
    }
    score
}
