//! Embedded sample knowledge base used when no `ALIGNMENT_KB_PATH` is configured.
//!
//! Course keys follow the registrar's spelling, so some read "BS in …" and
//! others "Bachelor of …". Synonyms must already be in `normalize_title` form.

use crate::alignment::knowledge_base::{CourseAlignmentEntry, CourseConfig, KnowledgeBaseConfig};
use crate::alignment::scorer::ScoringWeights;
use crate::alignment::synonyms::RoleBucketConfig;

type CourseRow = (&'static str, &'static [&'static str], &'static [(&'static str, f64)]);

const COURSES: &[CourseRow] = &[
    (
        "BS in Information Technology",
        &["BSIT"],
        &[
            ("Software Developer", 1.0),
            ("Web Developer", 0.9),
            ("Systems Analyst", 0.8),
            ("Network Administrator", 0.8),
            ("Database Administrator", 0.8),
            ("IT Support Specialist", 0.7),
            ("Quality Assurance Tester", 0.7),
        ],
    ),
    (
        "BS in Computer Science",
        &["BSCS"],
        &[
            ("Software Engineer", 1.0),
            ("Data Scientist", 0.9),
            ("Machine Learning Engineer", 0.9),
            ("Web Developer", 0.8),
            ("Research Assistant", 0.6),
        ],
    ),
    (
        "BS in Information Systems",
        &["BSIS"],
        &[
            ("Systems Analyst", 1.0),
            ("Business Analyst", 0.9),
            ("Database Administrator", 0.8),
            ("IT Project Manager", 0.8),
        ],
    ),
    (
        "Bachelor of Science in Accountancy",
        &["BSA"],
        &[
            ("Accountant", 1.0),
            ("Auditor", 1.0),
            ("Tax Consultant", 0.9),
            ("Financial Analyst", 0.8),
            ("Bookkeeper", 0.7),
        ],
    ),
    (
        "BS in Business Administration",
        &["BSBA"],
        &[
            ("Operations Manager", 0.9),
            ("Business Analyst", 0.8),
            ("Marketing Officer", 0.8),
            ("Entrepreneur", 0.8),
            ("Sales Manager", 0.7),
            ("Human Resources Officer", 0.7),
        ],
    ),
    (
        "BS in Nursing",
        &["BSN"],
        &[
            ("Registered Nurse", 1.0),
            ("Public Health Nurse", 0.9),
            ("Clinical Instructor", 0.7),
            ("Caregiver", 0.5),
        ],
    ),
    (
        "Bachelor of Secondary Education",
        &["BSEd"],
        &[
            ("Teacher", 1.0),
            ("Instructor", 0.9),
            ("School Administrator", 0.7),
            ("Tutor", 0.6),
        ],
    ),
    (
        "BS in Civil Engineering",
        &["BSCE"],
        &[
            ("Civil Engineer", 1.0),
            ("Site Engineer", 0.9),
            ("Structural Engineer", 0.9),
            ("Project Engineer", 0.8),
        ],
    ),
    (
        "BS in Psychology",
        &["AB Psychology"],
        &[
            ("Psychometrician", 1.0),
            ("Guidance Counselor", 0.9),
            ("Human Resources Associate", 0.8),
            ("Research Assistant", 0.6),
        ],
    ),
    (
        "BS in Hospitality Management",
        &["BSHM"],
        &[
            ("Hotel Manager", 1.0),
            ("Restaurant Manager", 0.9),
            ("Front Desk Agent", 0.7),
            ("Chef", 0.7),
        ],
    ),
    (
        "BS in Criminology",
        &["BSCrim"],
        &[
            ("Police Officer", 1.0),
            ("Jail Officer", 0.8),
            ("Forensic Analyst", 0.8),
            ("Security Officer", 0.6),
        ],
    ),
];

const ROLE_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "developer",
        &[
            "software developer",
            "software engineer",
            "programmer",
            "developer",
            "application developer",
        ],
    ),
    (
        "web developer",
        &[
            "web developer",
            "frontend developer",
            "backend developer",
            "full stack developer",
            "fullstack developer",
            "web programmer",
        ],
    ),
    (
        "accountant",
        &[
            "accountant",
            "certified public accountant",
            "cpa",
            "staff accountant",
            "accounting staff",
        ],
    ),
    (
        "auditor",
        &["auditor", "internal auditor", "external auditor", "audit associate"],
    ),
    ("nurse", &["nurse", "registered nurse", "staff nurse", "rn"]),
    (
        "teacher",
        &[
            "teacher",
            "educator",
            "high school teacher",
            "secondary school teacher",
        ],
    ),
    (
        "systems analyst",
        &["systems analyst", "system analyst", "it analyst"],
    ),
    (
        "network administrator",
        &[
            "network administrator",
            "network engineer",
            "system administrator",
            "systems administrator",
            "sysadmin",
        ],
    ),
    (
        "it support",
        &[
            "it support",
            "technical support",
            "help desk",
            "helpdesk",
            "it technician",
            "desktop support",
        ],
    ),
];

/// Builds the embedded configuration. Validation happens in `KnowledgeBase::from_config`.
pub fn default_config() -> KnowledgeBaseConfig {
    let courses = COURSES
        .iter()
        .map(|(name, aliases, roles)| CourseConfig {
            name: name.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            roles: roles
                .iter()
                .map(|(role_title, weight)| CourseAlignmentEntry {
                    role_title: role_title.to_string(),
                    weight: *weight,
                })
                .collect(),
        })
        .collect();

    let role_synonyms = ROLE_SYNONYMS
        .iter()
        .map(|(bucket, synonyms)| RoleBucketConfig {
            bucket: bucket.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        })
        .collect();

    KnowledgeBaseConfig {
        weights: ScoringWeights::default(),
        courses,
        role_synonyms,
    }
}
