//! Resume-match flow: scores how well a resume fits a target job title and
//! returns improvement suggestions.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::flows::prompts::{MAX_RESUME_CHARS, RESUME_MATCH_SHAPE, RESUME_MATCH_TEMPLATE};
use crate::flows::run_flow;
use crate::nexus::prompts::STRICT_JSON_PREAMBLE;
use crate::nexus::{truncate_chars, CompletionBackend};
use crate::validate::{Checks, Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeMatchInput {
    pub resume_text: String,
    pub job_title: String,
}

impl Validate for ResumeMatchInput {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = Checks::new();
        checks.min_len("resumeText", &self.resume_text, 10);
        checks.min_len("jobTitle", &self.job_title, 2);
        checks.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeMatchOutput {
    pub match_score: i64,
    pub analysis: String,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub point: String,
    pub suggestion: String,
}

impl Validate for ResumeMatchOutput {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = Checks::new();
        checks.range("matchScore", self.match_score, 0, 100);
        checks.finish()
    }
}

/// Pure and deterministic; resume text is bounded before interpolation.
pub fn build_prompt(input: &ResumeMatchInput) -> String {
    let body = RESUME_MATCH_TEMPLATE
        .replace("{job_title}", &input.job_title)
        .replace(
            "{resume_text}",
            truncate_chars(&input.resume_text, MAX_RESUME_CHARS),
        );
    format!("{body}\n\n{STRICT_JSON_PREAMBLE}\n{RESUME_MATCH_SHAPE}")
}

pub async fn analyze_resume(
    input: &ResumeMatchInput,
    backend: &dyn CompletionBackend,
) -> Result<ResumeMatchOutput, AppError> {
    run_flow("resume_match", input, build_prompt, backend).await
}
