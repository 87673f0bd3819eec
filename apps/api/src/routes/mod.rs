pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::flows::handlers;
use crate::state::AppState;
use crate::upload;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/analysis/resume-match",
            post(handlers::handle_resume_match),
        )
        .route(
            "/api/v1/analysis/job-recommendations",
            post(handlers::handle_job_recommendations),
        )
        .route(
            "/api/v1/analysis/rejection",
            post(handlers::handle_rejection_analysis),
        )
        .route("/api/v1/resumes/extract", post(upload::handle_extract))
        .with_state(state)
}
