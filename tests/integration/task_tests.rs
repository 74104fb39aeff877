//! Structured-extraction task helper tests
//!
//! Verify that the helper-level structured fallback is its own layer:
//! parseable JSON content becomes a typed value, and anything else -
//! including the orchestrator's keyword text fallback - triggers the
//! helper's hard-coded default.

use std::sync::Arc;

use pathlight::core::tasks::{jobs, quiz, resume, roadmap};
use pathlight::{GenerationProvider, Orchestrator, ProviderId, ProviderRegistry};

use crate::common::ScriptedProvider;

fn orchestrator_answering(text: &str) -> Orchestrator {
    let provider: Arc<dyn GenerationProvider> =
        Arc::new(ScriptedProvider::succeeding(ProviderId::Cohere, text));
    Orchestrator::new(ProviderRegistry::new(vec![provider]))
}

fn orchestrator_without_providers() -> Orchestrator {
    Orchestrator::new(ProviderRegistry::new(Vec::new()))
}

#[tokio::test]
async fn test_roadmap_parses_valid_json() {
    let orchestrator = orchestrator_answering(
        r#"Here you go:
{"career": "data engineer", "stages": [
  {"title": "Foundations", "duration": "2 months", "actions": ["Learn SQL"]},
  {"title": "Pipelines", "duration": "4 months", "actions": ["Build an ETL project"]}
]}"#,
    );

    let parsed = roadmap::generate_roadmap(&orchestrator, "data engineer").await;

    assert_eq!(parsed.career, "data engineer");
    assert_eq!(parsed.stages.len(), 2);
    assert_eq!(parsed.stages[1].title, "Pipelines");
}

#[tokio::test]
async fn test_roadmap_text_fallback_triggers_structured_default() {
    // Zero providers: the orchestrator answers with its keyword text
    // fallback, which is not JSON, so the helper applies its own default.
    let orchestrator = orchestrator_without_providers();

    let parsed = roadmap::generate_roadmap(&orchestrator, "nurse").await;

    assert_eq!(parsed, roadmap::CareerRoadmap::default_for("nurse"));
}

#[tokio::test]
async fn test_quiz_parses_valid_json() {
    let orchestrator = orchestrator_answering(
        r#"{"strengths": ["analysis"], "suggested_careers": ["actuary"], "summary": "numbers person"}"#,
    );

    let analysis = quiz::analyze_quiz(&orchestrator, &["I like statistics".to_string()]).await;

    assert_eq!(analysis.strengths, vec!["analysis"]);
    assert_eq!(analysis.suggested_careers, vec!["actuary"]);
}

#[tokio::test]
async fn test_quiz_prose_answer_triggers_structured_default() {
    let orchestrator =
        orchestrator_answering("I think you would be great at many things, good luck!");

    let analysis = quiz::analyze_quiz(&orchestrator, &["answer one".to_string()]).await;

    assert_eq!(analysis, quiz::QuizAnalysis::default());
}

#[tokio::test]
async fn test_resume_parses_fenced_json() {
    let orchestrator = orchestrator_answering(
        "```json\n{\"name\": \"Jane\", \"skills\": [\"welding\"], \"experience_years\": 10, \"summary\": \"senior welder\"}\n```",
    );

    let profile = resume::parse_resume(&orchestrator, "Jane Doe, welder, 10 years").await;

    assert_eq!(profile.name.as_deref(), Some("Jane"));
    assert_eq!(profile.skills, vec!["welding"]);
    assert_eq!(profile.experience_years, Some(10));
}

#[tokio::test]
async fn test_resume_unparseable_answer_triggers_structured_default() {
    let orchestrator = orchestrator_without_providers();

    let profile = resume::parse_resume(&orchestrator, "some resume text").await;

    assert_eq!(profile, resume::ResumeProfile::unparsed());
}

#[tokio::test]
async fn test_jobs_parses_valid_json_array() {
    let orchestrator = orchestrator_answering(
        r#"[{"title": "Data Engineer", "score": 88, "reason": "strong SQL background"}]"#,
    );

    let profile = resume::ResumeProfile {
        name: None,
        skills: vec!["sql".to_string()],
        experience_years: Some(3),
        summary: "data person".to_string(),
    };
    let matches = jobs::match_jobs(&orchestrator, &profile).await;

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].title, "Data Engineer");
    assert_eq!(matches[0].score, 88);
}

#[tokio::test]
async fn test_jobs_unparseable_answer_triggers_structured_default() {
    let orchestrator = orchestrator_answering("no list today");

    let matches = jobs::match_jobs(&orchestrator, &resume::ResumeProfile::unparsed()).await;

    assert_eq!(matches, jobs::default_matches());
}
