//! Property-based tests for progression invariants: whatever a learner
//! does over the demo catalog, levels only climb and gates always hold.

use proptest::prelude::*;

use trajectory::test_utils::{demo_curriculum, demo_student};
use trajectory::{SkillGain, SkillLevel};

const COURSE_CODES: [&str; 7] = [
    "py_basics",
    "sql_intro",
    "teamwork_lab",
    "web_django",
    "data_wrangling",
    "docker_ops",
    "ml_intro",
];

fn arb_course() -> impl Strategy<Value = &'static str> {
    prop::sample::select(COURSE_CODES.to_vec())
}

/// Arbitrary study history: course, grade, semester triples.
fn arb_steps() -> impl Strategy<Value = Vec<(&'static str, f64, u32)>> {
    prop::collection::vec((arb_course(), 0.0f64..=100.0, 1u32..=4), 0..10)
}

proptest! {
    #[test]
    fn test_skill_levels_never_decrease(steps in arb_steps()) {
        let curriculum = demo_curriculum();
        let mut student = demo_student();
        let mut previous = student.skill_profile();

        for (course, grade, semester) in steps {
            student
                .complete_course(&curriculum, course, grade, semester, None)
                .unwrap();
            let current = student.skill_profile();
            for (skill, level) in &previous {
                prop_assert!(current.get(skill).copied().unwrap_or(0) >= *level);
            }
            previous = current;
        }
    }

    #[test]
    fn test_zero_grade_changes_nothing(steps in arb_steps(), course in arb_course()) {
        let curriculum = demo_curriculum();
        let mut student = demo_student();
        for (code, grade, semester) in steps {
            student
                .complete_course(&curriculum, code, grade, semester, None)
                .unwrap();
        }

        let before = student.skill_profile();
        let report = student
            .complete_course(&curriculum, course, 0.0, 4, None)
            .unwrap();
        prop_assert!(report.changes.is_empty());
        prop_assert_eq!(student.skill_profile(), before);
    }

    #[test]
    fn test_recommendations_pass_the_gates(steps in arb_steps(), semester in 1u32..=4) {
        let curriculum = demo_curriculum();
        let mut student = demo_student();
        for (code, grade, sem) in steps {
            student
                .complete_course(&curriculum, code, grade, sem, None)
                .unwrap();
        }

        for rec in student.recommend(&curriculum, semester, None).unwrap() {
            prop_assert!(!student.has_completed(&rec.course.code));
            prop_assert!(rec.course.prerequisites_met(student.skills()));
            prop_assert_eq!(rec.course.semester, semester);
            prop_assert!(rec.relevance.is_finite());
        }
    }

    #[test]
    fn test_readiness_percentage_stays_bounded(steps in arb_steps()) {
        let curriculum = demo_curriculum();
        let mut student = demo_student();
        for (code, grade, semester) in steps {
            student
                .complete_course(&curriculum, code, grade, semester, None)
                .unwrap();
        }

        let report = student.graduation_readiness(&curriculum).unwrap();
        prop_assert!((0.0..=100.0).contains(&report.percentage));
        prop_assert_eq!(report.ready, report.missing.is_empty());
    }

    #[test]
    fn test_realized_gain_respects_base_and_ceiling(
        current_raw in 0u8..=10,
        base in 0u8..=10,
        ceiling_raw in 0u8..=10,
        performance in 0.0f64..=1.0,
    ) {
        let gain = SkillGain::new("python", base, SkillLevel::clamped(ceiling_raw));
        let current = SkillLevel::clamped(current_raw);

        let increase = gain.realized(current, performance);
        prop_assert!(increase <= base);
        prop_assert!(current.value() + increase <= ceiling_raw.max(current.value()));
    }

    #[test]
    fn test_better_grades_never_earn_worse_letters(
        g1 in 0.0f64..=100.0,
        g2 in 0.0f64..=100.0,
    ) {
        let (lo, hi) = if g1 <= g2 { (g1, g2) } else { (g2, g1) };
        let curriculum = demo_curriculum();
        let mut student = demo_student();
        student
            .complete_course(&curriculum, "py_basics", lo, 1, None)
            .unwrap();
        student
            .complete_course(&curriculum, "py_basics", hi, 2, None)
            .unwrap();

        let low_letter = student.completions()[0].letter_grade();
        let high_letter = student.completions()[1].letter_grade();
        prop_assert!("ABCDF".contains(low_letter));
        prop_assert!(high_letter <= low_letter);
    }
}
