//! Property-based serde roundtrips for catalog, config, and progression
//! types.

use std::collections::BTreeMap;

use proptest::prelude::*;

use trajectory::test_utils::{demo_curriculum, demo_student};
use trajectory::{
    Config, Course, Difficulty, Program, SkillGain, SkillLevel, SkillRequirement,
    StudentProgression,
};

fn arb_code() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("python".to_string()),
        Just("python.django".to_string()),
        Just("databases.sql".to_string()),
        Just("ml".to_string()),
        Just("devops.docker".to_string()),
        Just("soft.teamwork".to_string()),
    ]
}

fn arb_level() -> impl Strategy<Value = SkillLevel> {
    (0u8..=10).prop_map(SkillLevel::clamped)
}

fn arb_requirement() -> impl Strategy<Value = SkillRequirement> {
    (arb_code(), arb_level(), 0.0f64..=1.0).prop_map(|(skill, level, weight)| SkillRequirement {
        skill,
        level,
        weight,
    })
}

fn arb_gain() -> impl Strategy<Value = SkillGain> {
    (arb_code(), 0u8..=10, arb_level()).prop_map(|(skill, base_gain, ceiling)| SkillGain {
        skill,
        base_gain,
        ceiling,
    })
}

fn arb_course() -> impl Strategy<Value = Course> {
    let tier = || prop::collection::vec(arb_gain(), 0..3);
    (
        "[a-z][a-z0-9_]{2,12}",
        ".{1,24}",
        ".{0,48}",
        any::<bool>(),
        1u32..=6,
        0u32..=12,
        prop::collection::vec(arb_requirement(), 0..3),
        (tier(), tier(), tier()),
        any::<bool>(),
    )
        .prop_map(
            |(
                code,
                name,
                description,
                elective,
                semester,
                credits,
                prerequisites,
                (beginner, intermediate, advanced),
                adaptive,
            )| {
                let mut gains = BTreeMap::new();
                gains.insert(Difficulty::Beginner, beginner);
                gains.insert(Difficulty::Intermediate, intermediate);
                gains.insert(Difficulty::Advanced, advanced);
                Course {
                    code,
                    name,
                    description,
                    elective,
                    semester,
                    credits,
                    prerequisites,
                    gains,
                    adaptive,
                }
            },
        )
}

fn arb_program() -> impl Strategy<Value = Program> {
    (
        "[a-z][a-z0-9_]{2,12}",
        ".{1,24}",
        prop::collection::vec("[a-z][a-z0-9_]{2,12}", 0..4),
        prop::collection::vec("[a-z][a-z0-9_]{2,12}", 0..4),
        prop::collection::vec(arb_requirement(), 0..4),
        0u32..=6,
        1u32..=8,
    )
        .prop_map(
            |(code, name, required, elective, targets, min_electives, duration)| Program {
                code,
                name,
                description: String::new(),
                required_courses: required,
                elective_courses: elective,
                target_skills: targets,
                min_electives,
                duration_semesters: duration,
            },
        )
}

fn arb_config() -> impl Strategy<Value = Config> {
    (0.1f64..=1.0, 1.0f64..=2.0, 0.0f64..=1.0, 1usize..=20).prop_map(
        |(beginner_below, advanced_at, baseline_relevance, default_limit)| {
            let mut config = Config::default();
            config.difficulty.beginner_below = beginner_below;
            config.difficulty.advanced_at = advanced_at;
            config.recommendation.baseline_relevance = baseline_relevance;
            config.recommendation.default_limit = default_limit;
            config
        },
    )
}

proptest! {
    #[test]
    fn test_course_json_roundtrip(course in arb_course()) {
        let raw = serde_json::to_string(&course).unwrap();
        let parsed: Course = serde_json::from_str(&raw).unwrap();
        prop_assert_eq!(course, parsed);
    }

    #[test]
    fn test_program_json_roundtrip(program in arb_program()) {
        let raw = serde_json::to_string(&program).unwrap();
        let parsed: Program = serde_json::from_str(&raw).unwrap();
        prop_assert_eq!(program, parsed);
    }

    #[test]
    fn test_progression_json_roundtrip(
        steps in prop::collection::vec(
            (
                prop::sample::select(vec!["py_basics", "sql_intro", "web_django"]),
                0.0f64..=100.0,
                1u32..=4,
            ),
            0..6,
        )
    ) {
        let curriculum = demo_curriculum();
        let mut student = demo_student();
        for (course, grade, semester) in steps {
            student
                .complete_course(&curriculum, course, grade, semester, None)
                .unwrap();
        }

        let raw = serde_json::to_string(&student).unwrap();
        let parsed: StudentProgression = serde_json::from_str(&raw).unwrap();
        prop_assert_eq!(student, parsed);
    }

    #[test]
    fn test_config_toml_roundtrip(config in arb_config()) {
        let raw = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&raw).unwrap();
        let left: toml::Value = toml::from_str(&raw).unwrap();
        let right: toml::Value = toml::from_str(&toml::to_string(&parsed).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }
}
