use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::nexus::decode::DecodeError;
use crate::nexus::CompletionError;
use crate::validate::ValidationError;

/// Application-level error type covering the whole flow taxonomy.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller-supplied data failed structural or length constraints.
    /// Rejected before any network call; user-correctable.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// Transport, auth, or remote-service failure. Not retried.
    #[error("completion call failed: {0}")]
    Completion(#[from] CompletionError),

    /// The endpoint's payload could not be extracted or parsed as JSON.
    #[error("invalid completion response: {0}")]
    Decode(#[from] DecodeError),

    /// Decoded JSON did not match the flow's output shape. The last line of
    /// defense before untrusted generation output reaches callers.
    #[error("model output failed validation: {0}")]
    InvalidModelOutput(String),

    #[error("unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Upstream diagnostics are logged for operators and collapsed to a
        // generic message at the user boundary; input errors stay verbatim.
        let (status, code, message) = match &self {
            AppError::InvalidInput(err) => {
                (StatusCode::BAD_REQUEST, "INVALID_INPUT", err.to_string())
            }
            AppError::Completion(err) => {
                tracing::error!("Completion error: {err}");
                (
                    StatusCode::BAD_GATEWAY,
                    "COMPLETION_ERROR",
                    "The analysis service is temporarily unavailable".to_string(),
                )
            }
            AppError::Decode(err) => {
                tracing::error!("Decode error: {err}");
                (
                    StatusCode::BAD_GATEWAY,
                    "INVALID_RESPONSE",
                    "The analysis service returned an invalid response".to_string(),
                )
            }
            AppError::InvalidModelOutput(detail) => {
                tracing::error!("Model output rejected: {detail}");
                (
                    StatusCode::BAD_GATEWAY,
                    "INVALID_MODEL_OUTPUT",
                    "The analysis service returned an invalid response".to_string(),
                )
            }
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::Internal(err) => {
                tracing::error!("Internal error: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
