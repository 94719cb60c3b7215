//! Alignment knowledge base — course catalog, expected roles and synonym buckets.
//!
//! Built once at startup from either the embedded defaults or a JSON file, then
//! shared read-only behind an `Arc`. All validation happens here so that query
//! time never has to deal with malformed configuration.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::alignment::defaults::default_config;
use crate::alignment::normalizer::{normalize_course, normalize_title};
use crate::alignment::scorer::ScoringWeights;
use crate::alignment::synonyms::{RoleBucketConfig, RoleSynonymTable};

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

/// Load-time configuration errors. Any of these aborts startup.
#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("Failed to read knowledge base at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid knowledge base JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Knowledge base contains no courses")]
    EmptyCatalog,

    #[error("Course name is blank")]
    BlankCourse,

    #[error("Course '{course}': '{value}' normalizes to an empty string")]
    CourseNormalizesEmpty { course: String, value: String },

    #[error("Course '{course}' collides with '{conflicts_with}' (both normalize to '{normalized}')")]
    DuplicateCourse {
        course: String,
        conflicts_with: String,
        normalized: String,
    },

    #[error("Course '{course}' has a role title that normalizes to an empty string")]
    EmptyRoleTitle { course: String },

    #[error("Course '{course}', role '{role}': weight {weight} is outside (0, 1]")]
    InvalidWeight {
        course: String,
        role: String,
        weight: f64,
    },

    #[error("Synonym bucket name is blank")]
    BlankBucket,

    #[error("Duplicate synonym bucket '{0}'")]
    DuplicateBucket(String),

    #[error("Synonym '{synonym}' in bucket '{bucket}' is not in normalized form")]
    SynonymNotNormalized { bucket: String, synonym: String },

    #[error("Invalid scoring weights: {0}")]
    InvalidScoringWeights(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Configuration (serde) models
// ────────────────────────────────────────────────────────────────────────────

/// One expected role for a course. `weight` lies in (0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseAlignmentEntry {
    pub role_title: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseConfig {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub roles: Vec<CourseAlignmentEntry>,
}

/// On-disk shape of the knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBaseConfig {
    #[serde(default)]
    pub weights: ScoringWeights,
    pub courses: Vec<CourseConfig>,
    #[serde(default)]
    pub role_synonyms: Vec<RoleBucketConfig>,
}

// ────────────────────────────────────────────────────────────────────────────
// Validated runtime structures
// ────────────────────────────────────────────────────────────────────────────

/// A catalog course with its expected roles and precomputed match keys.
#[derive(Debug, Clone)]
pub struct CourseRecord {
    name: String,
    aliases: Vec<String>,
    roles: Vec<CourseAlignmentEntry>,
    /// Course-normalized name followed by each normalized alias.
    match_keys: Vec<String>,
}

impl CourseRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn roles(&self) -> &[CourseAlignmentEntry] {
        &self.roles
    }

    pub fn match_keys(&self) -> &[String] {
        &self.match_keys
    }
}

/// Course catalog in definition order.
#[derive(Debug, Clone, Default)]
pub struct CourseAlignmentTable {
    courses: Vec<CourseRecord>,
}

impl CourseAlignmentTable {
    pub fn iter(&self) -> impl Iterator<Item = &CourseRecord> {
        self.courses.iter()
    }

    /// Looks up a course by its canonical (catalog) name.
    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&CourseRecord> {
        self.courses.iter().find(|course| course.name == name)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// Immutable, validated knowledge base shared by every scoring call.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    courses: CourseAlignmentTable,
    synonyms: RoleSynonymTable,
    weights: ScoringWeights,
}

impl KnowledgeBase {
    /// The embedded sample knowledge base.
    pub fn builtin() -> Result<Self, KnowledgeBaseError> {
        let kb = Self::from_config(default_config())?;
        info!(
            courses = kb.courses.len(),
            buckets = kb.synonyms.len(),
            "Loaded embedded alignment knowledge base"
        );
        Ok(kb)
    }

    /// Reads and validates a JSON knowledge base from disk.
    pub fn load_from_path(path: &Path) -> Result<Self, KnowledgeBaseError> {
        let raw = std::fs::read_to_string(path).map_err(|source| KnowledgeBaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let kb = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            courses = kb.courses.len(),
            buckets = kb.synonyms.len(),
            "Loaded alignment knowledge base from file"
        );
        Ok(kb)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, KnowledgeBaseError> {
        let config: KnowledgeBaseConfig = serde_json::from_str(raw)?;
        Self::from_config(config)
    }

    /// Validates a configuration and builds the runtime structures.
    pub fn from_config(config: KnowledgeBaseConfig) -> Result<Self, KnowledgeBaseError> {
        config.weights.validate()?;

        // normalized key -> (index, name) of the owning course
        let mut claimed: HashMap<String, (usize, String)> = HashMap::new();
        let mut courses = Vec::with_capacity(config.courses.len());

        for (index, course) in config.courses.into_iter().enumerate() {
            let name = course.name.trim().to_string();
            if name.is_empty() {
                return Err(KnowledgeBaseError::BlankCourse);
            }

            let mut match_keys = Vec::with_capacity(course.aliases.len() + 1);
            for value in std::iter::once(&name).chain(course.aliases.iter()) {
                let normalized = normalize_course(Some(value.as_str()));
                if normalized.is_empty() {
                    return Err(KnowledgeBaseError::CourseNormalizesEmpty {
                        course: name.clone(),
                        value: value.clone(),
                    });
                }

                if let Some((owner_index, owner)) = claimed.get(&normalized) {
                    if *owner_index != index {
                        return Err(KnowledgeBaseError::DuplicateCourse {
                            course: name.clone(),
                            conflicts_with: owner.clone(),
                            normalized,
                        });
                    }
                    // alias repeats one of this course's own keys
                    continue;
                }

                claimed.insert(normalized.clone(), (index, name.clone()));
                match_keys.push(normalized);
            }

            for role in &course.roles {
                if normalize_title(Some(role.role_title.as_str())).is_empty() {
                    return Err(KnowledgeBaseError::EmptyRoleTitle { course: name });
                }
                if !(role.weight > 0.0 && role.weight <= 1.0) {
                    return Err(KnowledgeBaseError::InvalidWeight {
                        course: name,
                        role: role.role_title.clone(),
                        weight: role.weight,
                    });
                }
            }

            if course.roles.is_empty() {
                warn!(course = %name, "Course has no expected roles; it will always score 0");
            }

            courses.push(CourseRecord {
                name,
                aliases: course.aliases,
                roles: course.roles,
                match_keys,
            });
        }

        let courses = CourseAlignmentTable { courses };
        if courses.is_empty() {
            return Err(KnowledgeBaseError::EmptyCatalog);
        }

        let synonyms = RoleSynonymTable::new(config.role_synonyms)?;
        if synonyms.is_empty() {
            warn!("No role synonym buckets configured; titles are compared as normalized");
        }

        Ok(Self {
            courses,
            synonyms,
            weights: config.weights,
        })
    }

    pub fn courses(&self) -> &CourseAlignmentTable {
        &self.courses
    }

    pub fn synonyms(&self) -> &RoleSynonymTable {
        &self.synonyms
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }
}
