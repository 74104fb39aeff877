//! Job matching

use serde::{Deserialize, Serialize};

use crate::core::orchestrator::Orchestrator;
use crate::core::types::GenerationRequest;

use super::extract_json;
use super::resume::ResumeProfile;

/// One suggested job for a candidate profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    /// Job title
    pub title: String,
    /// Fit score in `0..=100`
    pub score: u32,
    /// Why this job fits the profile
    pub reason: String,
}

/// Structured default used when the model output is not parseable
pub fn default_matches() -> Vec<JobMatch> {
    vec![
        JobMatch {
            title: "Generalist / rotational program".to_string(),
            score: 50,
            reason: "Broad entry programs suit profiles we could not match precisely; they \
let you sample several functions before specializing."
                .to_string(),
        },
        JobMatch {
            title: "Customer-facing support role".to_string(),
            score: 45,
            reason: "Support roles build domain knowledge quickly and are a common stepping \
stone into specialized positions."
                .to_string(),
        },
    ]
}

fn build_prompt(profile: &ResumeProfile) -> String {
    format!(
        "Suggest jobs for this candidate profile:\nskills: {}\nexperience years: {}\nsummary: \
{}\nRespond with only a JSON array of objects of the shape {{\"title\": string, \"score\": \
number (0-100), \"reason\": string}}, best match first, and no other text.",
        profile.skills.join(", "),
        profile
            .experience_years
            .map_or("unknown".to_string(), |y| y.to_string()),
        profile.summary
    )
}

/// Match a candidate profile against likely jobs
///
/// Infallible: an unparseable answer yields [`default_matches`].
pub async fn match_jobs(orchestrator: &Orchestrator, profile: &ResumeProfile) -> Vec<JobMatch> {
    let request = GenerationRequest::new(build_prompt(profile)).with_max_tokens(600);
    let result = orchestrator.generate(&request).await;

    extract_json(&result.content).unwrap_or_else(default_matches)
}
