//! Response Decoder — turns a `RawCompletion` into the structured value the
//! flow asked the model for.
//!
//! The model is free-text-capable; the prompt's JSON-shape instruction is the
//! only thing keeping it structured. Any deviation is a hard decode failure,
//! not a repair target. The one tolerated quirk is markdown code fences
//! around otherwise valid JSON.

use serde_json::Value;
use thiserror::Error;

use super::RawCompletion;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unexpected response format")]
    UnexpectedFormat,

    #[error("invalid JSON in completion payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Extracts the textual payload from either transport shape.
pub fn payload(raw: &RawCompletion) -> Result<&str, DecodeError> {
    match raw {
        RawCompletion::Text(text) => Ok(text),
        RawCompletion::Envelope(envelope) => envelope
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or(DecodeError::UnexpectedFormat),
    }
}

/// Extracts the payload and parses it as JSON.
pub fn decode(raw: &RawCompletion) -> Result<Value, DecodeError> {
    let text = strip_json_fences(payload(raw)?);
    serde_json::from_str(text).map_err(DecodeError::InvalidJson)
}

/// Strips ```json ... ``` or ``` ... ``` fences the model sometimes wraps
/// JSON output in despite instructions.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(inner) => inner
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or_else(|| inner.trim_start()),
        None => text,
    }
}
