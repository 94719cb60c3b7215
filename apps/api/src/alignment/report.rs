//! Batch alignment reports consumed by chart and export collaborators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::alignment::scorer::{AlignmentQuery, AlignmentScorer};

/// Coarse classification of a score. `Unmatched` separates "no alignment data"
/// (missing input or unknown course) from a matched course with a 0 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentBand {
    Strong,
    Moderate,
    Weak,
    Unmatched,
}

impl AlignmentBand {
    pub fn classify(score: u32, course_matched: bool) -> Self {
        if !course_matched {
            AlignmentBand::Unmatched
        } else if score >= 80 {
            AlignmentBand::Strong
        } else if score >= 50 {
            AlignmentBand::Moderate
        } else {
            AlignmentBand::Weak
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentRow {
    pub course: Option<String>,
    pub job_title: Option<String>,
    pub matched_course: Option<String>,
    pub score: u32,
    pub band: AlignmentBand,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BandCounts {
    pub strong: usize,
    pub moderate: usize,
    pub weak: usize,
    pub unmatched: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: usize,
    pub matched: usize,
    /// Mean over matched rows only; 0.0 when nothing matched.
    pub mean_score: f64,
    pub bands: BandCounts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentReport {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<AlignmentRow>,
    pub summary: ReportSummary,
}

/// Scores every query and summarizes the results. Rows keep input order.
pub fn build_report(scorer: &dyn AlignmentScorer, queries: &[AlignmentQuery]) -> AlignmentReport {
    let rows: Vec<AlignmentRow> = queries
        .iter()
        .map(|query| {
            let breakdown =
                scorer.explain(query.raw_course.as_deref(), query.raw_title.as_deref());
            AlignmentRow {
                course: query.raw_course.clone(),
                job_title: query.raw_title.clone(),
                matched_course: breakdown.matched_course,
                score: breakdown.score,
                band: breakdown.band,
            }
        })
        .collect();

    let summary = summarize(&rows);

    AlignmentReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        rows,
        summary,
    }
}

fn summarize(rows: &[AlignmentRow]) -> ReportSummary {
    let mut bands = BandCounts::default();
    let mut matched_total = 0_u64;

    for row in rows {
        match row.band {
            AlignmentBand::Strong => bands.strong += 1,
            AlignmentBand::Moderate => bands.moderate += 1,
            AlignmentBand::Weak => bands.weak += 1,
            AlignmentBand::Unmatched => bands.unmatched += 1,
        }
        if row.band != AlignmentBand::Unmatched {
            matched_total += u64::from(row.score);
        }
    }

    let matched = rows.len() - bands.unmatched;
    let mean_score = if matched > 0 {
        matched_total as f64 / matched as f64
    } else {
        0.0
    };

    ReportSummary {
        total: rows.len(),
        matched,
        mean_score,
        bands,
    }
}
