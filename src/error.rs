//! Error handling for trajectory.
//!
//! [`TrajectoryError`] covers catalog-load failures (unknown or duplicate
//! identities, taxonomy cycles, malformed skill codes) and the ambient
//! IO/serialization plumbing. Enrollment refusal is deliberately not an
//! error: [`enroll`](crate::progression::StudentProgression::enroll) returns
//! `Ok(false)` and callers must check the flag.

use std::io;

use thiserror::Error;

/// Main error type for trajectory operations.
#[derive(Error, Debug)]
pub enum TrajectoryError {
    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    #[error("Unknown course: {0}")]
    UnknownCourse(String),

    #[error("Unknown program: {0}")]
    UnknownProgram(String),

    #[error("Taxonomy cycle detected at '{code}': {}", .cycle.join(" -> "))]
    TaxonomyCycle { code: String, cycle: Vec<String> },

    #[error("Duplicate skill code: {0}")]
    DuplicateSkill(String),

    #[error("Duplicate course code: {0}")]
    DuplicateCourse(String),

    #[error("Duplicate program code: {0}")]
    DuplicateProgram(String),

    #[error("Unknown student: {0}")]
    UnknownStudent(String),

    #[error("Student already registered: {0}")]
    DuplicateStudent(String),

    #[error("Invalid skill code '{code}': {reason}")]
    InvalidSkillCode { code: String, reason: String },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using TrajectoryError.
pub type Result<T> = std::result::Result<T, TrajectoryError>;
