//! Cohort bookkeeping over shared learner state.

use trajectory::test_utils::{demo_curriculum, demo_student};
use trajectory::{StudentProgression, StudentRoster, TrajectoryError};

#[test]
fn cohort_tracks_learners_independently() {
    let curriculum = demo_curriculum();
    let mut roster = StudentRoster::new();
    roster.register(demo_student()).expect("fresh id");
    roster
        .register(StudentProgression::new("s-1002", "Bojan Petrov", "ml_eng"))
        .expect("fresh id");

    roster
        .with_student("s-1001", |student| {
            student.complete_course(&curriculum, "py_basics", 100.0, 1, None)
        })
        .expect("completion succeeds");
    roster
        .with_student("s-1002", |student| {
            student.complete_course(&curriculum, "py_basics", 85.0, 1, None)
        })
        .expect("completion succeeds");

    let alice = roster
        .with_student("s-1001", |student| student.summary(&curriculum))
        .expect("summary resolves");
    let bojan = roster
        .with_student("s-1002", |student| student.summary(&curriculum))
        .expect("summary resolves");

    assert_eq!(alice.average_grade, 100.0);
    assert_eq!(bojan.average_grade, 85.0);
    assert_eq!(alice.program, "data_eng");
    assert_eq!(bojan.program, "ml_eng");

    let python = |id: &str| {
        roster
            .with_student(id, |student| Ok(student.skill_level("python").value()))
            .expect("student exists")
    };
    assert_eq!(python("s-1001"), 3);
    assert_eq!(python("s-1002"), 2);

    assert_eq!(roster.student_ids(), vec!["s-1001", "s-1002"]);
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut roster = StudentRoster::new();
    roster.register(demo_student()).expect("fresh id");

    let err = roster.register(demo_student()).unwrap_err();
    assert!(matches!(err, TrajectoryError::DuplicateStudent(id) if id == "s-1001"));

    let err = roster.with_student("s-404", |_| Ok(())).unwrap_err();
    assert!(matches!(err, TrajectoryError::UnknownStudent(id) if id == "s-404"));
}

#[test]
fn handles_share_one_learner() {
    let curriculum = demo_curriculum();
    let mut roster = StudentRoster::new();
    roster.register(demo_student()).expect("fresh id");

    let writer = roster.student("s-1001").expect("registered");
    let reader = roster.student("s-1001").expect("registered");

    writer
        .lock()
        .complete_course(&curriculum, "sql_intro", 90.0, 1, None)
        .expect("completion succeeds");

    let seen = reader.lock();
    assert!(seen.has_completed("sql_intro"));
    assert_eq!(seen.skill_level("databases.sql").value(), 2);
}
