//! What-if readiness checks against programs the learner is not on.

use trajectory::test_utils::demo_curriculum;
use trajectory::{SkillLevel, SkillLevels, StudentProgression, TrajectoryError};

fn seeded_student() -> StudentProgression {
    let skills: SkillLevels = [
        ("python", 6),
        ("ml", 4),
        ("ml.sklearn", 1),
        ("data_analysis.statistics", 3),
    ]
    .into_iter()
    .map(|(code, level)| (code.to_string(), SkillLevel::clamped(level)))
    .collect();
    StudentProgression::new("s-2001", "Mira Bell", "data_eng").with_skills(skills)
}

#[test]
fn what_if_readiness_for_another_program() {
    let curriculum = demo_curriculum();
    let student = seeded_student();

    let report = student
        .simulate_program(&curriculum, "ml_eng")
        .expect("demo program exists");
    assert!(!report.ready);
    assert_eq!(report.percentage, 75.0);
    let missing: Vec<&str> = report.missing.iter().map(|r| r.skill.as_str()).collect();
    assert_eq!(missing, vec!["ml.sklearn"]);

    // The learner's own program reads differently from the same skills.
    let own = student
        .graduation_readiness(&curriculum)
        .expect("demo program exists");
    assert_eq!(own.percentage, 25.0);
    assert_eq!(own.missing.len(), 3);
}

#[test]
fn simulation_never_mutates_the_learner() {
    let curriculum = demo_curriculum();
    let student = seeded_student();
    let before = student.clone();

    student
        .simulate_program(&curriculum, "ml_eng")
        .expect("demo program exists");
    student
        .simulate_program(&curriculum, "data_eng")
        .expect("demo program exists");

    assert_eq!(student, before);
}

#[test]
fn simulated_program_can_be_fully_ready() {
    let curriculum = demo_curriculum();
    let skills: SkillLevels = [
        ("python", 6),
        ("ml", 4),
        ("ml.sklearn", 3),
        ("data_analysis.statistics", 3),
    ]
    .into_iter()
    .map(|(code, level)| (code.to_string(), SkillLevel::clamped(level)))
    .collect();
    let student = StudentProgression::new("s-2002", "Ola Berg", "data_eng").with_skills(skills);

    let report = student
        .simulate_program(&curriculum, "ml_eng")
        .expect("demo program exists");
    assert!(report.ready);
    assert_eq!(report.percentage, 100.0);
    assert!(report.missing.is_empty());
}

#[test]
fn unknown_program_simulation_fails() {
    let curriculum = demo_curriculum();
    let student = seeded_student();

    let err = student
        .simulate_program(&curriculum, "astrophysics")
        .unwrap_err();
    assert!(matches!(err, TrajectoryError::UnknownProgram(code) if code == "astrophysics"));
}
