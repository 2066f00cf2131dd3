//! Program definitions: named curricula of required and elective courses
//! plus the skill targets a learner must reach to graduate.

use serde::{Deserialize, Serialize};

use super::course::SkillRequirement;

/// A static degree program. Courses are referenced by catalog code and
/// resolved through the owning curriculum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_courses: Vec<String>,
    #[serde(default)]
    pub elective_courses: Vec<String>,
    /// Graduation targets, evaluated in declaration order.
    #[serde(default)]
    pub target_skills: Vec<SkillRequirement>,
    #[serde(default = "default_min_electives")]
    pub min_electives: u32,
    #[serde(default = "default_duration")]
    pub duration_semesters: u32,
}

const fn default_min_electives() -> u32 {
    5
}

const fn default_duration() -> u32 {
    4
}

impl Program {
    /// Every course code the program offers: required first, then
    /// electives, each in declaration order.
    pub fn all_courses(&self) -> impl Iterator<Item = &str> {
        self.required_courses
            .iter()
            .chain(&self.elective_courses)
            .map(String::as_str)
    }

    #[must_use]
    pub fn offers(&self, course_code: &str) -> bool {
        self.all_courses().any(|code| code == course_code)
    }
}
