//! Shared demo fixtures: a realistic IT skill tree with two degree
//! programs over one course catalog. Used by integration tests and
//! benchmarks; handy for examples and manual exploration too.

use std::collections::BTreeMap;

use crate::catalog::{Course, Curriculum, Program, SkillGain, SkillRequirement};
use crate::config::Config;
use crate::level::{Difficulty, SkillLevel};
use crate::progression::StudentProgression;
use crate::taxonomy::{Skill, SkillTaxonomy, TaxonomyBuilder};

/// Requirement shorthand for fixture catalogs.
#[must_use]
pub fn req(skill: &str, level: u8, weight: f64) -> SkillRequirement {
    SkillRequirement::new(skill, SkillLevel::clamped(level), weight)
}

/// Gain shorthand for fixture catalogs.
#[must_use]
pub fn gain(skill: &str, base: u8, ceiling: u8) -> SkillGain {
    SkillGain::new(skill, base, SkillLevel::clamped(ceiling))
}

/// IT-competency tree: eleven category roots with their specializations.
#[must_use]
pub fn demo_taxonomy() -> SkillTaxonomy {
    let mut builder = TaxonomyBuilder::new();
    let branches: &[(&str, &str, &str, &[(&str, &str, &str)])] = &[
        (
            "python",
            "Python",
            "Python language and ecosystem",
            &[
                ("python.django", "Django", "Django web framework"),
                ("python.flask", "Flask", "Flask microframework"),
                ("python.pandas", "Pandas", "Data analysis library"),
                ("python.numpy", "NumPy", "Numerical computing library"),
            ],
        ),
        (
            "javascript",
            "JavaScript",
            "JavaScript language",
            &[
                ("javascript.react", "React", "React library"),
                ("javascript.vue", "Vue.js", "Vue.js framework"),
                ("javascript.nodejs", "Node.js", "Server-side Node.js platform"),
            ],
        ),
        (
            "java",
            "Java",
            "Java language",
            &[("java.spring", "Spring", "Spring framework")],
        ),
        ("cpp", "C++", "C++ and systems programming", &[]),
        (
            "databases",
            "Databases",
            "Data storage",
            &[
                ("databases.sql", "SQL", "SQL query language"),
                ("databases.postgresql", "PostgreSQL", "PostgreSQL RDBMS"),
                ("databases.mongodb", "MongoDB", "MongoDB NoSQL store"),
                ("databases.redis", "Redis", "Redis in-memory store"),
            ],
        ),
        (
            "ml",
            "Machine Learning",
            "Machine learning",
            &[
                ("ml.sklearn", "Scikit-learn", "scikit-learn library"),
                ("ml.tensorflow", "TensorFlow", "TensorFlow framework"),
                ("ml.pytorch", "PyTorch", "PyTorch framework"),
                ("ml.nlp", "NLP", "Natural language processing"),
                ("ml.cv", "Computer Vision", "Computer vision"),
            ],
        ),
        (
            "devops",
            "DevOps",
            "DevOps practices",
            &[
                ("devops.docker", "Docker", "Docker containerization"),
                ("devops.kubernetes", "Kubernetes", "Kubernetes orchestration"),
                ("devops.cicd", "CI/CD", "Continuous integration and delivery"),
            ],
        ),
        (
            "architecture",
            "Software Architecture",
            "Software architecture",
            &[
                (
                    "architecture.microservices",
                    "Microservices",
                    "Microservice architecture",
                ),
                ("architecture.api", "API Design", "API design"),
                ("architecture.patterns", "Design Patterns", "Design patterns"),
            ],
        ),
        (
            "data_analysis",
            "Data Analysis",
            "Data analysis",
            &[
                ("data_analysis.statistics", "Statistics", "Statistics"),
                (
                    "data_analysis.visualization",
                    "Data Visualization",
                    "Data visualization",
                ),
            ],
        ),
        (
            "security",
            "Cybersecurity",
            "Cybersecurity",
            &[
                ("security.web", "Web Security", "Web security"),
                ("security.crypto", "Cryptography", "Cryptography"),
            ],
        ),
        (
            "soft",
            "Soft Skills",
            "Soft skills",
            &[
                ("soft.teamwork", "Teamwork", "Teamwork"),
                ("soft.communication", "Communication", "Communication"),
                ("soft.pm", "Project Management", "Project management"),
            ],
        ),
    ];

    for (code, name, description, children) in branches {
        builder
            .insert(Skill::root(*code, *name, *description))
            .expect("demo taxonomy roots are unique");
        for (child_code, child_name, child_description) in *children {
            builder
                .insert(Skill::child(*code, *child_code, *child_name, *child_description))
                .expect("demo taxonomy children are unique");
        }
    }
    builder.build().expect("demo taxonomy is a valid tree")
}

fn tiers(
    beginner: Vec<SkillGain>,
    intermediate: Vec<SkillGain>,
    advanced: Vec<SkillGain>,
) -> BTreeMap<Difficulty, Vec<SkillGain>> {
    let mut gains = BTreeMap::new();
    gains.insert(Difficulty::Beginner, beginner);
    gains.insert(Difficulty::Intermediate, intermediate);
    gains.insert(Difficulty::Advanced, advanced);
    gains
}

/// Two master's programs (data engineering, ML engineering) sharing one
/// catalog of seven courses over three semesters.
#[must_use]
pub fn demo_curriculum() -> Curriculum {
    let mut builder = Curriculum::builder(demo_taxonomy()).with_config(Config::default());

    let courses = vec![
        Course {
            code: "py_basics".to_string(),
            name: "Python Programming".to_string(),
            description: "Core Python up to idiomatic library use".to_string(),
            elective: false,
            semester: 1,
            credits: 6,
            prerequisites: Vec::new(),
            gains: tiers(
                vec![gain("python", 3, 5)],
                vec![gain("python", 4, 7), gain("soft.teamwork", 1, 3)],
                vec![gain("python", 5, 8)],
            ),
            adaptive: true,
        },
        Course {
            code: "sql_intro".to_string(),
            name: "Relational Databases".to_string(),
            description: "SQL and relational modeling".to_string(),
            elective: false,
            semester: 1,
            credits: 5,
            prerequisites: Vec::new(),
            gains: tiers(
                vec![gain("databases.sql", 3, 5), gain("databases", 2, 4)],
                vec![gain("databases.sql", 4, 7), gain("databases", 2, 5)],
                vec![gain("databases.sql", 5, 8), gain("databases.postgresql", 2, 5)],
            ),
            adaptive: true,
        },
        Course {
            code: "teamwork_lab".to_string(),
            name: "Team Project Lab".to_string(),
            description: "Small-team delivery practice".to_string(),
            elective: true,
            semester: 1,
            credits: 3,
            prerequisites: Vec::new(),
            gains: tiers(
                Vec::new(),
                vec![gain("soft.teamwork", 3, 5), gain("soft.communication", 2, 4)],
                Vec::new(),
            ),
            adaptive: false,
        },
        Course {
            code: "web_django".to_string(),
            name: "Web Development with Django".to_string(),
            description: "Server-side web applications".to_string(),
            elective: false,
            semester: 2,
            credits: 6,
            prerequisites: vec![req("python", 3, 1.0)],
            gains: tiers(
                vec![gain("python.django", 2, 4)],
                vec![gain("python.django", 3, 6), gain("python", 1, 8)],
                vec![gain("python.django", 4, 8), gain("architecture.api", 2, 5)],
            ),
            adaptive: true,
        },
        Course {
            code: "data_wrangling".to_string(),
            name: "Data Wrangling".to_string(),
            description: "Pandas, NumPy, practical statistics".to_string(),
            elective: true,
            semester: 2,
            credits: 5,
            prerequisites: vec![req("python", 2, 0.8)],
            gains: tiers(
                vec![gain("python.pandas", 2, 4), gain("data_analysis", 1, 3)],
                vec![
                    gain("python.pandas", 3, 6),
                    gain("python.numpy", 2, 5),
                    gain("data_analysis.statistics", 2, 5),
                ],
                vec![gain("python.pandas", 4, 8), gain("data_analysis.statistics", 3, 6)],
            ),
            adaptive: true,
        },
        Course {
            code: "docker_ops".to_string(),
            name: "Containerized Operations".to_string(),
            description: "Docker images, compose, delivery pipelines".to_string(),
            elective: true,
            semester: 2,
            credits: 4,
            prerequisites: Vec::new(),
            gains: tiers(
                vec![gain("devops.docker", 2, 4)],
                vec![gain("devops.docker", 3, 6), gain("devops.cicd", 2, 4)],
                vec![gain("devops.kubernetes", 2, 5), gain("devops.cicd", 3, 6)],
            ),
            adaptive: true,
        },
        Course {
            code: "ml_intro".to_string(),
            name: "Machine Learning Fundamentals".to_string(),
            description: "Supervised learning with scikit-learn".to_string(),
            elective: true,
            semester: 3,
            credits: 6,
            prerequisites: vec![req("python", 4, 1.0), req("data_analysis.statistics", 2, 0.6)],
            gains: tiers(
                vec![gain("ml", 2, 4)],
                vec![gain("ml", 3, 6), gain("ml.sklearn", 3, 6)],
                vec![gain("ml", 4, 8), gain("ml.sklearn", 4, 8), gain("ml.nlp", 1, 3)],
            ),
            adaptive: true,
        },
    ];
    for course in courses {
        builder.course(course).expect("demo course codes are unique");
    }

    builder
        .program(Program {
            code: "data_eng".to_string(),
            name: "Data Engineering".to_string(),
            description: "Master's track for data platform engineers".to_string(),
            required_courses: vec![
                "py_basics".to_string(),
                "sql_intro".to_string(),
                "web_django".to_string(),
            ],
            elective_courses: vec![
                "data_wrangling".to_string(),
                "docker_ops".to_string(),
                "teamwork_lab".to_string(),
            ],
            target_skills: vec![
                req("python", 5, 1.0),
                req("databases.sql", 4, 0.9),
                req("python.django", 4, 0.7),
                req("soft.teamwork", 2, 0.4),
            ],
            min_electives: 2,
            duration_semesters: 4,
        })
        .expect("demo program codes are unique");

    builder
        .program(Program {
            code: "ml_eng".to_string(),
            name: "Machine Learning Engineering".to_string(),
            description: "Master's track for applied ML engineers".to_string(),
            required_courses: vec![
                "py_basics".to_string(),
                "data_wrangling".to_string(),
                "ml_intro".to_string(),
            ],
            elective_courses: vec!["sql_intro".to_string(), "docker_ops".to_string()],
            target_skills: vec![
                req("python", 6, 1.0),
                req("ml", 4, 1.0),
                req("ml.sklearn", 3, 0.8),
                req("data_analysis.statistics", 3, 0.6),
            ],
            min_electives: 1,
            duration_semesters: 4,
        })
        .expect("demo program codes are unique");

    builder.build().expect("demo curriculum is consistent")
}

/// A fresh learner on the data engineering track.
#[must_use]
pub fn demo_student() -> StudentProgression {
    StudentProgression::new("s-1001", "Alice Novak", "data_eng")
}
