//! Course Matcher — resolves a free-text course string to a catalog course.

use tracing::debug;

use crate::alignment::knowledge_base::{CourseAlignmentTable, CourseRecord};
use crate::alignment::normalizer::normalize_course;
use crate::alignment::similarity::string_similarity;

/// Minimum similarity (exclusive) for a catalog course to be accepted.
pub const DEFAULT_COURSE_MATCH_THRESHOLD: f64 = 0.4;

/// A catalog course selected for a query, with the similarity that won it.
#[derive(Debug, Clone, Copy)]
pub struct CourseMatch<'a> {
    pub course: &'a CourseRecord,
    pub similarity: f64,
}

/// Finds the catalog course most similar to `raw_course`.
///
/// Each course is scored by its best match key (name or alias). The course with
/// the highest score wins; ties keep the earlier course in table order. Returns
/// `None` for blank input or when the best score does not exceed `threshold`.
pub fn match_course<'a>(
    table: &'a CourseAlignmentTable,
    raw_course: Option<&str>,
    threshold: f64,
) -> Option<CourseMatch<'a>> {
    let normalized = normalize_course(raw_course);
    if normalized.is_empty() {
        return None;
    }

    let mut best: Option<CourseMatch<'a>> = None;

    for course in table.iter() {
        let similarity = course
            .match_keys()
            .iter()
            .map(|key| string_similarity(&normalized, key))
            .fold(0.0_f64, f64::max);

        if best.map_or(true, |b| similarity > b.similarity) {
            best = Some(CourseMatch { course, similarity });
        }
    }

    match best {
        Some(found) if found.similarity > threshold => Some(found),
        _ => {
            debug!(
                course = %normalized,
                best_similarity = best.map(|b| b.similarity).unwrap_or(0.0),
                "No catalog course matched"
            );
            None
        }
    }
}
