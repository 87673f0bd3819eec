//! Resume upload boundary: accepts a PDF and returns its extracted text.
//!
//! The flows take plain `resumeText` only; clients holding a PDF call this
//! endpoint first and feed the result into a flow. Extraction quality is the
//! PDF library's problem — a file with no extractable text is a 422.

use axum::{extract::Multipart, Json};
use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::AppError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractResponse {
    pub resume_text: String,
}

/// POST /api/v1/resumes/extract
///
/// Multipart with a single `file` part containing the PDF bytes.
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::UnprocessableEntity(format!("invalid multipart payload: {e}")))?
    {
        if field.name() == Some("file") {
            let data: Bytes = field.bytes().await.map_err(|e| {
                AppError::UnprocessableEntity(format!("failed to read uploaded file: {e}"))
            })?;
            debug!(bytes = data.len(), "extracting text from uploaded resume");
            let resume_text = extract_resume_text(&data)?;
            return Ok(Json(ExtractResponse { resume_text }));
        }
    }

    Err(AppError::UnprocessableEntity(
        "missing 'file' part in multipart payload".to_string(),
    ))
}

/// Extracts plain text from PDF bytes.
pub fn extract_resume_text(data: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(data).map_err(|e| {
        warn!("PDF text extraction failed: {e}");
        AppError::UnprocessableEntity("could not extract text from the uploaded PDF".to_string())
    })?;

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "the uploaded PDF contains no extractable text".to_string(),
        ));
    }
    Ok(text)
}
