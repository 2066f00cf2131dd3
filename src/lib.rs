//! Adaptive curriculum core: skill taxonomies, per-student course
//! difficulty, skill growth from completed courses, course
//! recommendation, and graduation readiness with what-if program
//! comparisons.
//!
//! The catalog side ([`taxonomy`], [`catalog`]) is loaded once and shared
//! read-only; [`progression::StudentProgression`] is the sole mutable
//! aggregate and advances through `enroll` and `complete_course`.
//! [`recommend`] and [`graduation`] are pure functions over both.

pub mod catalog;
pub mod config;
pub mod error;
pub mod graduation;
pub mod level;
pub mod progression;
pub mod recommend;
pub mod roster;
pub mod taxonomy;
pub mod test_utils;

pub use catalog::{
    CatalogDoc, Course, Curriculum, CurriculumBuilder, Program, SkillGain, SkillRequirement,
};
pub use config::Config;
pub use error::{Result, TrajectoryError};
pub use graduation::ReadinessReport;
pub use level::{Difficulty, SkillLevel, SkillLevels};
pub use progression::{CompletionReport, CourseCompletion, StudentProgression, StudentSummary};
pub use recommend::Recommendation;
pub use roster::StudentRoster;
pub use taxonomy::{Skill, SkillTaxonomy};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
