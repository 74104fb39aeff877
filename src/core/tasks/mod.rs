//! Structured-extraction task helpers
//!
//! Thin layers over [`Orchestrator::generate`](crate::core::orchestrator::Orchestrator::generate)
//! for tasks that want a typed document back: career roadmaps, quiz
//! analysis, resume parsing, and job matching. Each helper asks the model
//! for JSON, extracts the first JSON block from the returned content, and
//! falls back to its own hard-coded structured default when parsing fails.
//!
//! This structured fallback is independent of the orchestrator's keyword
//! text fallback: the orchestrator degrades when no provider answers, a
//! helper degrades when the answer is not parseable JSON. The two layers
//! never merge - a keyword-fallback text that is not JSON simply triggers
//! the helper's own default.

pub mod jobs;
pub mod quiz;
pub mod resume;
pub mod roadmap;

use serde::de::DeserializeOwned;

/// Extract and deserialize the first JSON document embedded in model output
///
/// Models routinely wrap JSON in prose or markdown fences; this scans for
/// the outermost `{...}` or `[...]` span and tries to parse it. Returns
/// `None` when no parseable document is found.
pub fn extract_json<T: DeserializeOwned>(content: &str) -> Option<T> {
    for (open, close) in [('{', '}'), ('[', ']')] {
        let start = match content.find(open) {
            Some(i) => i,
            None => continue,
        };
        let end = match content.rfind(close) {
            Some(i) if i > start => i,
            _ => continue,
        };

        if let Ok(value) = serde_json::from_str(&content[start..=end]) {
            return Some(value);
        }
    }

    None
}
