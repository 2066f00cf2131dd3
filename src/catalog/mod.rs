//! The curriculum context: one immutable bundle of skill taxonomy,
//! course table, program table, and tuning configuration.
//!
//! Downstream computations (progression, recommendation, graduation)
//! resolve every skill, course, and program reference through this
//! context, so tests and multi-tenant hosts can hold several independent
//! catalogs at once. Construction validates all cross-references; after
//! `build` the context is immutable and safely shared read-only.

pub mod course;
pub mod program;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Config;
use crate::error::{Result, TrajectoryError};
use crate::taxonomy::SkillTaxonomy;

pub use course::{Course, SkillGain, SkillRequirement};
pub use program::Program;

/// Immutable catalog context.
#[derive(Debug, Clone)]
pub struct Curriculum {
    taxonomy: SkillTaxonomy,
    courses: HashMap<String, Course>,
    programs: HashMap<String, Program>,
    config: Config,
}

impl Curriculum {
    #[must_use]
    pub fn builder(taxonomy: SkillTaxonomy) -> CurriculumBuilder {
        CurriculumBuilder::new(taxonomy)
    }

    /// Build a curriculum from a parsed catalog document.
    pub fn from_doc(taxonomy: SkillTaxonomy, config: Config, doc: CatalogDoc) -> Result<Self> {
        let mut builder = CurriculumBuilder::new(taxonomy).with_config(config);
        for course in doc.courses {
            builder.course(course)?;
        }
        for program in doc.programs {
            builder.program(program)?;
        }
        builder.build()
    }

    /// Build a curriculum from a raw JSON catalog document.
    pub fn from_json_str(taxonomy: SkillTaxonomy, config: Config, raw: &str) -> Result<Self> {
        let doc: CatalogDoc = serde_json::from_str(raw)?;
        Self::from_doc(taxonomy, config, doc)
    }

    #[must_use]
    pub fn taxonomy(&self) -> &SkillTaxonomy {
        &self.taxonomy
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Look up a course by code.
    pub fn course(&self, code: &str) -> Result<&Course> {
        self.courses
            .get(code)
            .ok_or_else(|| TrajectoryError::UnknownCourse(code.to_string()))
    }

    /// Look up a program by code.
    pub fn program(&self, code: &str) -> Result<&Program> {
        self.programs
            .get(code)
            .ok_or_else(|| TrajectoryError::UnknownProgram(code.to_string()))
    }

    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    #[must_use]
    pub fn program_count(&self) -> usize {
        self.programs.len()
    }

    /// A program's required and elective courses scheduled for one
    /// semester, each list in declaration order. Codes were validated at
    /// build time, so resolution cannot miss.
    #[must_use]
    pub fn semester_offerings(&self, program: &Program, semester: u32) -> SemesterOfferings<'_> {
        let pick = |codes: &[String]| {
            codes
                .iter()
                .filter_map(|code| self.courses.get(code))
                .filter(|course| course.semester == semester)
                .collect()
        };
        SemesterOfferings {
            required: pick(&program.required_courses),
            elective: pick(&program.elective_courses),
        }
    }
}

/// One semester's slice of a program.
#[derive(Debug)]
pub struct SemesterOfferings<'a> {
    pub required: Vec<&'a Course>,
    pub elective: Vec<&'a Course>,
}

impl<'a> SemesterOfferings<'a> {
    /// Required courses followed by electives.
    pub fn all(&self) -> impl Iterator<Item = &'a Course> + '_ {
        self.required.iter().chain(&self.elective).copied()
    }
}

/// Wire format for course and program catalogs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDoc {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub programs: Vec<Program>,
}

/// Collects courses and programs, then cross-validates the whole catalog
/// against the taxonomy at `build`.
#[derive(Debug)]
pub struct CurriculumBuilder {
    taxonomy: SkillTaxonomy,
    config: Config,
    courses: Vec<Course>,
    course_codes: HashSet<String>,
    programs: Vec<Program>,
    program_codes: HashSet<String>,
}

impl CurriculumBuilder {
    #[must_use]
    pub fn new(taxonomy: SkillTaxonomy) -> Self {
        Self {
            taxonomy,
            config: Config::default(),
            courses: Vec::new(),
            course_codes: HashSet::new(),
            programs: Vec::new(),
            program_codes: HashSet::new(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Register a course; codes must be unique.
    pub fn course(&mut self, course: Course) -> Result<()> {
        if course.code.is_empty() {
            return Err(TrajectoryError::InvalidCatalog(
                "course code is empty".to_string(),
            ));
        }
        if !self.course_codes.insert(course.code.clone()) {
            return Err(TrajectoryError::DuplicateCourse(course.code));
        }
        self.courses.push(course);
        Ok(())
    }

    /// Register a program; codes must be unique.
    pub fn program(&mut self, program: Program) -> Result<()> {
        if program.code.is_empty() {
            return Err(TrajectoryError::InvalidCatalog(
                "program code is empty".to_string(),
            ));
        }
        if !self.program_codes.insert(program.code.clone()) {
            return Err(TrajectoryError::DuplicateProgram(program.code));
        }
        self.programs.push(program);
        Ok(())
    }

    /// Validate every cross-reference and freeze the catalog.
    pub fn build(self) -> Result<Curriculum> {
        self.config.validate()?;

        for course in &self.courses {
            for req in &course.prerequisites {
                check_requirement(&self.taxonomy, req, "course", &course.code)?;
            }
            for gains in course.gains.values() {
                for gain in gains {
                    if !self.taxonomy.contains(&gain.skill) {
                        return Err(TrajectoryError::UnknownSkill(gain.skill.clone()));
                    }
                }
            }
        }

        for program in &self.programs {
            for code in program.all_courses() {
                if !self.course_codes.contains(code) {
                    return Err(TrajectoryError::UnknownCourse(code.to_string()));
                }
            }
            for code in &program.required_courses {
                if program.elective_courses.contains(code) {
                    return Err(TrajectoryError::InvalidCatalog(format!(
                        "program '{}' lists course '{code}' as both required and elective",
                        program.code
                    )));
                }
            }
            for req in &program.target_skills {
                check_requirement(&self.taxonomy, req, "program", &program.code)?;
            }
        }

        let mut curriculum = Curriculum {
            taxonomy: self.taxonomy,
            courses: HashMap::with_capacity(self.courses.len()),
            programs: HashMap::with_capacity(self.programs.len()),
            config: self.config,
        };
        for course in self.courses {
            curriculum.courses.insert(course.code.clone(), course);
        }
        for program in self.programs {
            curriculum.programs.insert(program.code.clone(), program);
        }

        info!(
            skills = curriculum.taxonomy.len(),
            courses = curriculum.course_count(),
            programs = curriculum.program_count(),
            "curriculum built"
        );
        Ok(curriculum)
    }
}

fn check_requirement(
    taxonomy: &SkillTaxonomy,
    req: &SkillRequirement,
    owner_kind: &str,
    owner_code: &str,
) -> Result<()> {
    if !taxonomy.contains(&req.skill) {
        return Err(TrajectoryError::UnknownSkill(req.skill.clone()));
    }
    if !req.weight.is_finite() || !(0.0..=1.0).contains(&req.weight) {
        return Err(TrajectoryError::InvalidCatalog(format!(
            "{owner_kind} '{owner_code}': weight {} for skill '{}' outside [0, 1]",
            req.weight, req.skill
        )));
    }
    Ok(())
}
