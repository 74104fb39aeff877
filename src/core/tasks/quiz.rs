//! Career quiz analysis

use serde::{Deserialize, Serialize};

use crate::core::orchestrator::Orchestrator;
use crate::core::types::GenerationRequest;

use super::extract_json;

/// Interpretation of a completed career quiz
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizAnalysis {
    /// Strengths inferred from the answers
    pub strengths: Vec<String>,
    /// Careers that fit the profile
    pub suggested_careers: Vec<String>,
    /// Short narrative summary
    pub summary: String,
}

impl Default for QuizAnalysis {
    fn default() -> Self {
        Self {
            strengths: vec![
                "Willingness to reflect on your own interests".to_string(),
                "Openness to structured self-assessment".to_string(),
            ],
            suggested_careers: vec![
                "Business analysis".to_string(),
                "Teaching and training".to_string(),
                "Project coordination".to_string(),
            ],
            summary: "Your answers suggest a balanced profile. Explore a few of the suggested \
fields through short projects or informational interviews to find which one energizes you most."
                .to_string(),
        }
    }
}

fn build_prompt(answers: &[String]) -> String {
    format!(
        "A student answered a career-interest quiz as follows:\n{}\nAnalyze the answers and \
respond with only a JSON object of the shape {{\"strengths\": [string], \
\"suggested_careers\": [string], \"summary\": string}} and no other text.",
        answers.join("\n")
    )
}

/// Analyze quiz answers into a typed profile
///
/// Infallible: an unparseable answer yields the structured default.
pub async fn analyze_quiz(orchestrator: &Orchestrator, answers: &[String]) -> QuizAnalysis {
    let request = GenerationRequest::new(build_prompt(answers)).with_max_tokens(600);
    let result = orchestrator.generate(&request).await;

    extract_json(&result.content).unwrap_or_default()
}
