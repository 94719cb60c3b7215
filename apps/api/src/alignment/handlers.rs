//! Axum route handlers for the Alignment API.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::alignment::report::{build_report, AlignmentReport};
use crate::alignment::scorer::{AlignmentBreakdown, AlignmentQuery, AlignmentResult};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub rows: Vec<AlignmentQuery>,
}

#[derive(Debug, Serialize)]
pub struct CourseSummary {
    pub name: String,
    pub aliases: Vec<String>,
    pub role_count: usize,
}

#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub courses: Vec<CourseSummary>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/alignment/score
///
/// Scores a single (course, job title) pair. Missing or unknown values yield
/// score 0, never an error.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(query): Json<AlignmentQuery>,
) -> Json<AlignmentResult> {
    Json(state.scorer.score(&query))
}

/// POST /api/v1/alignment/explain
///
/// Same scoring as `/score`, plus the matched course, resolved title, best
/// role and band. Unknown or missing input comes back with band `unmatched`.
pub async fn handle_explain(
    State(state): State<AppState>,
    Json(query): Json<AlignmentQuery>,
) -> Json<AlignmentBreakdown> {
    Json(
        state
            .scorer
            .explain(query.raw_course.as_deref(), query.raw_title.as_deref()),
    )
}

/// POST /api/v1/alignment/report
///
/// Scores a batch of rows for report/export collaborators. Rows come back in
/// request order with a summary. Scoring is CPU-bound and runs on the blocking pool.
pub async fn handle_report(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Result<Json<AlignmentReport>, AppError> {
    if request.rows.is_empty() {
        return Err(AppError::Validation("rows cannot be empty".to_string()));
    }
    let max_rows = state.config.batch_max_rows;
    if request.rows.len() > max_rows {
        return Err(AppError::Validation(format!(
            "rows has {} entries; at most {max_rows} are allowed per report",
            request.rows.len()
        )));
    }

    let scorer = Arc::clone(&state.scorer);
    let report = tokio::task::spawn_blocking(move || build_report(scorer.as_ref(), &request.rows))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in report: {e}")))?;

    tracing::info!(
        report_id = %report.report_id,
        rows = report.summary.total,
        matched = report.summary.matched,
        "Alignment report generated"
    );

    Ok(Json(report))
}

/// GET /api/v1/alignment/courses
///
/// Lists the catalog in table order, e.g. for course pickers.
pub async fn handle_list_courses(State(state): State<AppState>) -> Json<CourseListResponse> {
    let courses = state
        .knowledge_base
        .courses()
        .iter()
        .map(|course| CourseSummary {
            name: course.name().to_string(),
            aliases: course.aliases().to_vec(),
            role_count: course.roles().len(),
        })
        .collect();

    Json(CourseListResponse { courses })
}
