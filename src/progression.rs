//! Per-learner progression state and the course-completion algorithm.
//!
//! `StudentProgression` is the only mutable aggregate in the crate; the
//! curriculum context it reads is immutable and shared. Mutation happens
//! through exactly two operations, `enroll` and `complete_course`, and
//! both resolve every catalog reference before touching state, so a
//! failed call leaves the learner untouched.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::Curriculum;
use crate::error::Result;
use crate::graduation::{self, ReadinessReport};
use crate::level::{Difficulty, SkillLevel, SkillLevels};
use crate::recommend::{self, Recommendation};

/// Immutable record of one course completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseCompletion {
    /// Course code.
    pub course: String,
    /// Numeric grade in [0, 100].
    pub grade: f64,
    /// Difficulty the learner actually took the course at.
    pub difficulty: Difficulty,
    pub completed_at: DateTime<Utc>,
    pub semester: u32,
}

impl CourseCompletion {
    /// Grade normalized to [0, 1]; scales realized skill gains.
    #[must_use]
    pub fn performance(&self) -> f64 {
        (self.grade / 100.0).clamp(0.0, 1.0)
    }

    /// US letter grade for display.
    #[must_use]
    pub fn letter_grade(&self) -> char {
        if self.grade >= 90.0 {
            'A'
        } else if self.grade >= 80.0 {
            'B'
        } else if self.grade >= 70.0 {
            'C'
        } else if self.grade >= 60.0 {
            'D'
        } else {
            'F'
        }
    }
}

/// One skill moved by a completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillChange {
    pub skill: String,
    pub from: SkillLevel,
    pub to: SkillLevel,
}

/// Outcome of a single `complete_course` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionReport {
    pub course: String,
    pub difficulty: Difficulty,
    pub performance: f64,
    /// Skill movements in gain declaration order; empty when nothing rose.
    pub changes: Vec<SkillChange>,
}

/// A learner's trajectory through one program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProgression {
    pub student_id: String,
    pub name: String,
    /// Home program code.
    pub program: String,
    pub current_semester: u32,
    skills: SkillLevels,
    completions: Vec<CourseCompletion>,
    enrolled: Vec<String>,
}

impl StudentProgression {
    pub fn new(
        student_id: impl Into<String>,
        name: impl Into<String>,
        program: impl Into<String>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            name: name.into(),
            program: program.into(),
            current_semester: 1,
            skills: SkillLevels::new(),
            completions: Vec::new(),
            enrolled: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_semester(mut self, semester: u32) -> Self {
        self.current_semester = semester;
        self
    }

    /// Seed skills when rehydrating a learner from persistence.
    #[must_use]
    pub fn with_skills(mut self, skills: SkillLevels) -> Self {
        self.skills = skills;
        self
    }

    #[must_use]
    pub fn skills(&self) -> &SkillLevels {
        &self.skills
    }

    /// Current level for one skill; unknown codes read as level 0.
    #[must_use]
    pub fn skill_level(&self, code: &str) -> SkillLevel {
        self.skills.get(code)
    }

    /// Completion history, oldest first.
    #[must_use]
    pub fn completions(&self) -> &[CourseCompletion] {
        &self.completions
    }

    /// Currently enrolled course codes in enrollment order.
    #[must_use]
    pub fn enrolled(&self) -> &[String] {
        &self.enrolled
    }

    #[must_use]
    pub fn has_completed(&self, course_code: &str) -> bool {
        self.completions.iter().any(|c| c.course == course_code)
    }

    #[must_use]
    pub fn is_enrolled(&self, course_code: &str) -> bool {
        self.enrolled.iter().any(|c| c == course_code)
    }

    /// Record a completed course and grow skills.
    ///
    /// Difficulty is resolved fresh against the learner's pre-completion
    /// levels, the record is appended, then each gain for that tier is
    /// applied: `floor(base_gain * performance)` capped at the gain's
    /// ceiling, and stored levels only ever move up. `completed_at`
    /// defaults to now.
    ///
    /// Completing a course twice is permitted and records a second entry;
    /// gains apply again under the same ceilings. Prerequisites are not
    /// checked here; `enroll` is the only prerequisite gate.
    pub fn complete_course(
        &mut self,
        curriculum: &Curriculum,
        course_code: &str,
        grade: f64,
        semester: u32,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<CompletionReport> {
        let course = curriculum.course(course_code)?;

        if self.has_completed(course_code) {
            warn!(
                student = %self.student_id,
                course = course_code,
                "repeat completion recorded; skill gains apply again"
            );
        }

        let difficulty = course.resolve_difficulty(&self.skills, &curriculum.config().difficulty);
        let completion = CourseCompletion {
            course: course.code.clone(),
            grade,
            difficulty,
            completed_at: completed_at.unwrap_or_else(Utc::now),
            semester,
        };
        let performance = completion.performance();
        self.completions.push(completion);

        let mut changes = Vec::new();
        for gain in course.gains_for(difficulty) {
            let current = self.skills.get(&gain.skill);
            let increase = gain.realized(current, performance);
            if increase == 0 {
                continue;
            }
            let target = SkillLevel::clamped(current.value() + increase);
            if self.skills.raise_to(&gain.skill, target) {
                changes.push(SkillChange {
                    skill: gain.skill.clone(),
                    from: current,
                    to: target,
                });
            }
        }

        debug!(
            student = %self.student_id,
            course = course_code,
            difficulty = %difficulty,
            skills_changed = changes.len(),
            "course completed"
        );

        Ok(CompletionReport {
            course: course_code.to_string(),
            difficulty,
            performance,
            changes,
        })
    }

    /// Enroll in a course.
    ///
    /// Returns `Ok(false)` without touching state when the course was
    /// already completed or any prerequisite is unmet. Enrolling twice in
    /// the same course keeps a single entry.
    pub fn enroll(&mut self, curriculum: &Curriculum, course_code: &str) -> Result<bool> {
        let course = curriculum.course(course_code)?;

        if self.has_completed(course_code) {
            debug!(
                student = %self.student_id,
                course = course_code,
                "enrollment refused: already completed"
            );
            return Ok(false);
        }
        if !course.prerequisites_met(&self.skills) {
            debug!(
                student = %self.student_id,
                course = course_code,
                "enrollment refused: prerequisites unmet"
            );
            return Ok(false);
        }

        if !self.is_enrolled(course_code) {
            self.enrolled.push(course_code.to_string());
        }
        Ok(true)
    }

    /// Snapshot of skill code to raw level for display.
    #[must_use]
    pub fn skill_profile(&self) -> BTreeMap<String, u8> {
        self.skills.profile()
    }

    /// Readiness against the learner's own program.
    pub fn graduation_readiness(&self, curriculum: &Curriculum) -> Result<ReadinessReport> {
        let program = curriculum.program(&self.program)?;
        Ok(graduation::evaluate(program, &self.skills))
    }

    /// What-if readiness against any other program. Read-only.
    pub fn simulate_program(
        &self,
        curriculum: &Curriculum,
        program_code: &str,
    ) -> Result<ReadinessReport> {
        let program = curriculum.program(program_code)?;
        Ok(graduation::evaluate(program, &self.skills))
    }

    /// Ranked course recommendations for a semester; see [`recommend`].
    ///
    /// [`recommend`]: crate::recommend::recommend
    pub fn recommend<'a>(
        &self,
        curriculum: &'a Curriculum,
        semester: u32,
        limit: Option<usize>,
    ) -> Result<Vec<Recommendation<'a>>> {
        recommend::recommend(curriculum, self, semester, limit)
    }

    /// Aggregate view of the learner for dashboards.
    pub fn summary(&self, curriculum: &Curriculum) -> Result<StudentSummary> {
        let readiness = self.graduation_readiness(curriculum)?;

        let mut total_credits = 0u32;
        for completion in &self.completions {
            total_credits += curriculum.course(&completion.course)?.credits;
        }
        let average_grade = if self.completions.is_empty() {
            0.0
        } else {
            self.completions.iter().map(|c| c.grade).sum::<f64>() / self.completions.len() as f64
        };

        Ok(StudentSummary {
            student_id: self.student_id.clone(),
            name: self.name.clone(),
            program: self.program.clone(),
            current_semester: self.current_semester,
            completed_courses: self.completions.len(),
            total_credits,
            average_grade,
            skills_count: self.skills.len(),
            graduation_readiness: readiness.percentage,
            missing_skills: readiness.missing.len(),
        })
    }
}

/// Dashboard-level aggregate of one learner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub student_id: String,
    pub name: String,
    pub program: String,
    pub current_semester: u32,
    pub completed_courses: usize,
    pub total_credits: u32,
    pub average_grade: f64,
    pub skills_count: usize,
    pub graduation_readiness: f64,
    pub missing_skills: usize,
}
