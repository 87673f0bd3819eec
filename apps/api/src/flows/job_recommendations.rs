//! Job-recommendation flow: suggests three job titles and companies the
//! candidate should target, with reasoning per pick.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::flows::prompts::{
    JOB_RECOMMENDATIONS_SHAPE, JOB_RECOMMENDATIONS_TEMPLATE, MAX_RESUME_CHARS,
};
use crate::flows::run_flow;
use crate::nexus::prompts::STRICT_JSON_PREAMBLE;
use crate::nexus::{truncate_chars, CompletionBackend};
use crate::validate::{Checks, Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecommendationsInput {
    pub resume_text: String,
}

impl Validate for JobRecommendationsInput {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = Checks::new();
        checks.min_len("resumeText", &self.resume_text, 10);
        checks.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecommendationsOutput {
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub job_title: String,
    pub company: String,
    pub reasoning: String,
}

impl Validate for JobRecommendationsOutput {
    fn validate(&self) -> Result<(), ValidationError> {
        // No numeric or length constraints beyond the serde-checked shape.
        Ok(())
    }
}

pub fn build_prompt(input: &JobRecommendationsInput) -> String {
    let body = JOB_RECOMMENDATIONS_TEMPLATE.replace(
        "{resume_text}",
        truncate_chars(&input.resume_text, MAX_RESUME_CHARS),
    );
    format!("{body}\n\n{STRICT_JSON_PREAMBLE}\n{JOB_RECOMMENDATIONS_SHAPE}")
}

pub async fn job_recommendations(
    input: &JobRecommendationsInput,
    backend: &dyn CompletionBackend,
) -> Result<JobRecommendationsOutput, AppError> {
    run_flow("job_recommendations", input, build_prompt, backend).await
}
