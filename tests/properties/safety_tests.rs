//! Property-based tests for safety - loaders and progression never panic
//! on hostile input.

use proptest::prelude::*;

use trajectory::taxonomy::loader;
use trajectory::test_utils::{demo_curriculum, demo_student, demo_taxonomy};
use trajectory::{Config, Curriculum, SkillLevel, StudentProgression};

proptest! {
    #[test]
    fn test_taxonomy_json_deserialize_never_panics(input in ".*") {
        let _ = loader::from_json_str(&input);
    }

    #[test]
    fn test_catalog_json_deserialize_never_panics(input in ".*") {
        let _ = Curriculum::from_json_str(demo_taxonomy(), Config::default(), &input);
    }

    #[test]
    fn test_config_toml_deserialize_never_panics(input in ".*") {
        let _ = Config::from_toml_str(&input);
    }

    #[test]
    fn test_progression_json_deserialize_never_panics(input in ".*") {
        let _: Result<StudentProgression, _> = serde_json::from_str(&input);
    }

    #[test]
    fn test_skill_level_construction_is_total(raw in any::<u8>()) {
        prop_assert_eq!(SkillLevel::try_from(raw).is_ok(), raw <= 10);
        prop_assert!(SkillLevel::clamped(raw).value() <= 10);
    }

    #[test]
    fn test_wild_grades_never_break_progression(grade in any::<f64>()) {
        let curriculum = demo_curriculum();
        let mut student = demo_student();

        let report = student
            .complete_course(&curriculum, "py_basics", grade, 1, None)
            .unwrap();
        prop_assert!(report.changes.len() <= 1);
        prop_assert!(student.skill_level("python").value() <= 10);
        prop_assert!("ABCDF".contains(student.completions()[0].letter_grade()));
    }
}
