//! Alignment Scorer — how well a job title fits the expected career paths of a course.
//!
//! `AlignmentEngine` is the default (and only) backend: a pure function of the
//! knowledge base and the two input strings. `AppState` carries it as
//! `Arc<dyn AlignmentScorer>` so handlers and report builders never depend on
//! the concrete type.
//!
//! Algorithm, per query:
//! 1. Blank course or title → 0.
//! 2. Match the course against the catalog; no match → 0.
//! 3. Resolve the normalized title through the synonym table.
//! 4. For every expected role of the course (also normalized and resolved):
//!    `combined = (w_j·jaccard + w_f·fuzzy) × 100 × role_weight`.
//! 5. Score = round(min(100, max combined)).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::alignment::course_matcher::{match_course, DEFAULT_COURSE_MATCH_THRESHOLD};
use crate::alignment::knowledge_base::{KnowledgeBase, KnowledgeBaseError};
use crate::alignment::normalizer::normalize_title;
use crate::alignment::report::AlignmentBand;
use crate::alignment::similarity::{string_similarity, token_jaccard};

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

/// Blend weights for the per-role score and the course-match cut-off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub jaccard: f64,
    pub fuzzy: f64,
    /// Course similarity must be strictly greater than this.
    pub course_match_threshold: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            jaccard: 0.5,
            fuzzy: 0.5,
            course_match_threshold: DEFAULT_COURSE_MATCH_THRESHOLD,
        }
    }
}

impl ScoringWeights {
    pub fn validate(&self) -> Result<(), KnowledgeBaseError> {
        let usable = |w: f64| w.is_finite() && w >= 0.0;
        if !usable(self.jaccard) || !usable(self.fuzzy) {
            return Err(KnowledgeBaseError::InvalidScoringWeights(format!(
                "jaccard ({}) and fuzzy ({}) must be finite and non-negative",
                self.jaccard, self.fuzzy
            )));
        }
        if self.jaccard + self.fuzzy <= 0.0 {
            return Err(KnowledgeBaseError::InvalidScoringWeights(
                "jaccard + fuzzy must be greater than 0".to_string(),
            ));
        }
        if !(self.course_match_threshold >= 0.0 && self.course_match_threshold < 1.0) {
            return Err(KnowledgeBaseError::InvalidScoringWeights(format!(
                "course_match_threshold ({}) must lie in [0, 1)",
                self.course_match_threshold
            )));
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Query / result models
// ────────────────────────────────────────────────────────────────────────────

/// One (course, job title) pair as supplied by a caller. Either side may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlignmentQuery {
    #[serde(rename = "course", default)]
    pub raw_course: Option<String>,
    #[serde(rename = "job_title", default)]
    pub raw_title: Option<String>,
}

impl AlignmentQuery {
    #[cfg(test)]
    pub fn new(course: Option<&str>, job_title: Option<&str>) -> Self {
        Self {
            raw_course: course.map(str::to_string),
            raw_title: job_title.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentResult {
    pub score: u32, // 0 – 100
}

/// The expected role that produced the final score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleMatch {
    pub role_title: String,
    pub resolved_role: String,
    pub weight: f64,
    pub jaccard: f64,
    pub fuzzy: f64,
    pub combined: f64,
}

/// A score together with the intermediate decisions behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentBreakdown {
    pub score: u32,
    pub band: AlignmentBand,
    pub matched_course: Option<String>,
    pub course_similarity: Option<f64>,
    pub resolved_title: String,
    pub best_role: Option<RoleMatch>,
}

impl AlignmentBreakdown {
    fn unmatched(resolved_title: String) -> Self {
        Self {
            score: 0,
            band: AlignmentBand::Unmatched,
            matched_course: None,
            course_similarity: None,
            resolved_title,
            best_role: None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scoring seam. Implementations must be total: no input string may panic or error.
pub trait AlignmentScorer: Send + Sync {
    fn explain(&self, course: Option<&str>, job_title: Option<&str>) -> AlignmentBreakdown;

    /// Alignment score in `[0, 100]` for one (course, job title) pair.
    fn compute_alignment_score(&self, course: Option<&str>, job_title: Option<&str>) -> u32 {
        self.explain(course, job_title).score
    }

    fn score(&self, query: &AlignmentQuery) -> AlignmentResult {
        AlignmentResult {
            score: self.compute_alignment_score(
                query.raw_course.as_deref(),
                query.raw_title.as_deref(),
            ),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// AlignmentEngine — knowledge-base backed scorer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct AlignmentEngine {
    kb: Arc<KnowledgeBase>,
}

impl AlignmentEngine {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }
}

impl AlignmentScorer for AlignmentEngine {
    fn explain(&self, course: Option<&str>, job_title: Option<&str>) -> AlignmentBreakdown {
        let synonyms = self.kb.synonyms();
        let weights = self.kb.weights();

        let normalized_position = normalize_title(job_title);
        let position = synonyms.resolve_role(&normalized_position);

        if is_blank(course) || is_blank(job_title) {
            return AlignmentBreakdown::unmatched(position.to_string());
        }

        let Some(found) = match_course(self.kb.courses(), course, weights.course_match_threshold)
        else {
            return AlignmentBreakdown::unmatched(position.to_string());
        };

        let mut best: Option<RoleMatch> = None;

        for entry in found.course.roles() {
            let normalized_role = normalize_title(Some(entry.role_title.as_str()));
            let role = synonyms.resolve_role(&normalized_role);

            let jaccard = token_jaccard(position, role);
            let fuzzy = string_similarity(position, role);
            let combined = (weights.jaccard * jaccard + weights.fuzzy * fuzzy) * 100.0 * entry.weight;

            // strict: the first role in table order keeps a tie
            if best.as_ref().map_or(true, |b| combined > b.combined) {
                best = Some(RoleMatch {
                    role_title: entry.role_title.clone(),
                    resolved_role: role.to_string(),
                    weight: entry.weight,
                    jaccard,
                    fuzzy,
                    combined,
                });
            }
        }

        let max_combined = best.as_ref().map_or(0.0, |b| b.combined);
        let score = max_combined.clamp(0.0, 100.0).round() as u32;

        AlignmentBreakdown {
            score,
            band: AlignmentBand::classify(score, true),
            matched_course: Some(found.course.name().to_string()),
            course_similarity: Some(found.similarity),
            resolved_title: position.to_string(),
            best_role: best,
        }
    }
}

fn is_blank(text: Option<&str>) -> bool {
    text.map_or(true, |t| t.trim().is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
