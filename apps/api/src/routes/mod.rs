pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::alignment::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Alignment API
        .route("/api/v1/alignment/score", post(handlers::handle_score))
        .route("/api/v1/alignment/explain", post(handlers::handle_explain))
        .route("/api/v1/alignment/report", post(handlers::handle_report))
        .route(
            "/api/v1/alignment/courses",
            get(handlers::handle_list_courses),
        )
        .with_state(state)
}
