//! Rejection-analysis flow: infers plausible reasons a resume was rejected
//! for a given job title, each paired with a concrete fix.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::flows::prompts::{
    MAX_RESUME_CHARS, REJECTION_ANALYSIS_SHAPE, REJECTION_ANALYSIS_TEMPLATE,
};
use crate::flows::run_flow;
use crate::nexus::prompts::STRICT_JSON_PREAMBLE;
use crate::nexus::{truncate_chars, CompletionBackend};
use crate::validate::{Checks, Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectionAnalysisInput {
    pub resume_text: String,
    pub job_title: String,
}

impl Validate for RejectionAnalysisInput {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = Checks::new();
        checks.min_len("resumeText", &self.resume_text, 10);
        checks.min_len("jobTitle", &self.job_title, 2);
        checks.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectionAnalysisOutput {
    pub reasons: Vec<RejectionReason>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectionReason {
    pub reason: String,
    pub suggestion: String,
}

impl Validate for RejectionAnalysisOutput {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

pub fn build_prompt(input: &RejectionAnalysisInput) -> String {
    let body = REJECTION_ANALYSIS_TEMPLATE
        .replace("{job_title}", &input.job_title)
        .replace(
            "{resume_text}",
            truncate_chars(&input.resume_text, MAX_RESUME_CHARS),
        );
    format!("{body}\n\n{STRICT_JSON_PREAMBLE}\n{REJECTION_ANALYSIS_SHAPE}")
}

pub async fn rejection_analysis(
    input: &RejectionAnalysisInput,
    backend: &dyn CompletionBackend,
) -> Result<RejectionAnalysisOutput, AppError> {
    run_flow("rejection_analysis", input, build_prompt, backend).await
}
