//! Axum route handlers for the three analysis flows.
//!
//! Handlers stay thin: deserialize the typed input, hand it to the flow with
//! the shared completion backend, serialize the typed output. All error
//! shaping lives in `AppError::into_response`.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::flows::job_recommendations::{
    job_recommendations, JobRecommendationsInput, JobRecommendationsOutput,
};
use crate::flows::rejection_analysis::{
    rejection_analysis, RejectionAnalysisInput, RejectionAnalysisOutput,
};
use crate::flows::resume_match::{analyze_resume, ResumeMatchInput, ResumeMatchOutput};
use crate::state::AppState;

/// POST /api/v1/analysis/resume-match
pub async fn handle_resume_match(
    State(state): State<AppState>,
    Json(input): Json<ResumeMatchInput>,
) -> Result<Json<ResumeMatchOutput>, AppError> {
    let output = analyze_resume(&input, state.completion.as_ref()).await?;
    Ok(Json(output))
}

/// POST /api/v1/analysis/job-recommendations
pub async fn handle_job_recommendations(
    State(state): State<AppState>,
    Json(input): Json<JobRecommendationsInput>,
) -> Result<Json<JobRecommendationsOutput>, AppError> {
    let output = job_recommendations(&input, state.completion.as_ref()).await?;
    Ok(Json(output))
}

/// POST /api/v1/analysis/rejection
pub async fn handle_rejection_analysis(
    State(state): State<AppState>,
    Json(input): Json<RejectionAnalysisInput>,
) -> Result<Json<RejectionAnalysisOutput>, AppError> {
    let output = rejection_analysis(&input, state.completion.as_ref()).await?;
    Ok(Json(output))
}
