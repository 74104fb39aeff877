//! Resume text parsing

use serde::{Deserialize, Serialize};

use crate::core::orchestrator::Orchestrator;
use crate::core::types::GenerationRequest;

use super::extract_json;

/// Structured profile extracted from free-form resume text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeProfile {
    /// Candidate name, when the text states one
    #[serde(default)]
    pub name: Option<String>,
    /// Skills the resume mentions
    #[serde(default)]
    pub skills: Vec<String>,
    /// Total years of experience, when derivable
    #[serde(default)]
    pub experience_years: Option<u32>,
    /// One-paragraph professional summary
    #[serde(default)]
    pub summary: String,
}

impl ResumeProfile {
    /// Structured default used when the model output is not parseable
    pub fn unparsed() -> Self {
        Self {
            name: None,
            skills: Vec::new(),
            experience_years: None,
            summary: "The resume could not be analyzed automatically. Review it manually or \
try again with the text in a simpler format."
                .to_string(),
        }
    }
}

fn build_prompt(resume_text: &str) -> String {
    format!(
        "Extract a structured profile from this resume:\n---\n{resume_text}\n---\nRespond with \
only a JSON object of the shape {{\"name\": string|null, \"skills\": [string], \
\"experience_years\": number|null, \"summary\": string}} and no other text."
    )
}

/// Parse resume text into a typed profile
///
/// Infallible: an unparseable answer yields [`ResumeProfile::unparsed`].
pub async fn parse_resume(orchestrator: &Orchestrator, resume_text: &str) -> ResumeProfile {
    let request = GenerationRequest::new(build_prompt(resume_text)).with_max_tokens(600);
    let result = orchestrator.generate(&request).await;

    extract_json(&result.content).unwrap_or_else(ResumeProfile::unparsed)
}
