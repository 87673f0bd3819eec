// Prompt templates for the three analysis flows.
//
// Each template interpolates validated fields via `.replace` on the
// `{placeholder}` markers. The JSON shape constants mirror the flow output
// types in resume_match.rs / job_recommendations.rs / rejection_analysis.rs
// field-for-field; change them together or decoding breaks.

/// Free-text fields are cut to this many characters before interpolation so
/// the template keeps its structure instead of being cut mid-field by the
/// client's own prompt truncation.
pub const MAX_RESUME_CHARS: usize = 8000;

pub const RESUME_MATCH_TEMPLATE: &str = r#"You are an expert resume analyst.

Analyze the following resume for the job title: "{job_title}".

Provide:
- A match score (0-100)
- A concise analysis of how well the resume fits the role
- 2-5 improvement suggestions, each with a specific point and actionable advice

Resume:
"""{resume_text}""""#;

pub const RESUME_MATCH_SHAPE: &str = r#"{
  "matchScore": 0,
  "analysis": "",
  "suggestions": [
    {
      "point": "",
      "suggestion": ""
    }
  ]
}"#;

pub const JOB_RECOMMENDATIONS_TEMPLATE: &str = r#"You are an expert job market analyst. Based on the resume below, recommend exactly three suitable job titles and companies. For each recommendation, provide a clear reason why the candidate is a good fit.

Resume:
"""{resume_text}""""#;

pub const JOB_RECOMMENDATIONS_SHAPE: &str = r#"{
  "recommendations": [
    {
      "jobTitle": "string",
      "company": "string",
      "reasoning": "string"
    },
    {
      "jobTitle": "string",
      "company": "string",
      "reasoning": "string"
    },
    {
      "jobTitle": "string",
      "company": "string",
      "reasoning": "string"
    }
  ]
}"#;

pub const REJECTION_ANALYSIS_TEMPLATE: &str = r#"You are an expert resume analyst. Analyze the provided resume for the job title "{job_title}" and identify potential reasons for rejection. For each reason, provide a constructive suggestion for improvement.

Resume:
"""{resume_text}""""#;

pub const REJECTION_ANALYSIS_SHAPE: &str = r#"{
  "reasons": [
    {
      "reason": "",
      "suggestion": ""
    }
  ]
}"#;
