//! Career roadmap generation

use serde::{Deserialize, Serialize};

use crate::core::orchestrator::Orchestrator;
use crate::core::types::GenerationRequest;

use super::extract_json;

/// One stage of a career roadmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapStage {
    /// Short stage title
    pub title: String,
    /// Rough duration, e.g. "3 months"
    pub duration: String,
    /// Concrete actions for the stage
    pub actions: Vec<String>,
}

/// A staged plan toward a target career
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRoadmap {
    /// The career the roadmap targets
    pub career: String,
    /// Ordered stages
    pub stages: Vec<RoadmapStage>,
}

impl CareerRoadmap {
    /// Structured default used when the model output is not parseable
    pub fn default_for(career: &str) -> Self {
        Self {
            career: career.to_string(),
            stages: vec![
                RoadmapStage {
                    title: "Explore the field".to_string(),
                    duration: "1 month".to_string(),
                    actions: vec![
                        format!("Read introductory material about {career}"),
                        "Talk to two people already working in the role".to_string(),
                        "List the core skills the role requires".to_string(),
                    ],
                },
                RoadmapStage {
                    title: "Build foundations".to_string(),
                    duration: "3 months".to_string(),
                    actions: vec![
                        "Complete one structured course covering the core skills".to_string(),
                        "Practice each new concept in a small project".to_string(),
                    ],
                },
                RoadmapStage {
                    title: "Gain experience".to_string(),
                    duration: "6 months".to_string(),
                    actions: vec![
                        "Ship a portfolio project end to end".to_string(),
                        "Apply for internships or entry-level positions".to_string(),
                        "Collect feedback and iterate".to_string(),
                    ],
                },
            ],
        }
    }
}

fn build_prompt(career: &str) -> String {
    format!(
        "Create a career roadmap for becoming a {career}. Respond with only a JSON object of \
the shape {{\"career\": string, \"stages\": [{{\"title\": string, \"duration\": string, \
\"actions\": [string]}}]}} with three to five stages and no other text."
    )
}

/// Generate a roadmap for the given career
///
/// Infallible: an unparseable answer (including the orchestrator's own
/// text fallback) yields the structured default.
pub async fn generate_roadmap(orchestrator: &Orchestrator, career: &str) -> CareerRoadmap {
    let request = GenerationRequest::new(build_prompt(career)).with_max_tokens(800);
    let result = orchestrator.generate(&request).await;

    extract_json(&result.content).unwrap_or_else(|| CareerRoadmap::default_for(career))
}
