//! Common types shared across providers and the orchestrator

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for an external AI provider
///
/// The declaration order is the fixed priority order used by the
/// orchestrator when building its candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    /// Hugging Face Inference API
    HuggingFace,
    /// Cohere generate API
    Cohere,
    /// Local Ollama server
    Ollama,
}

impl ProviderId {
    /// All providers in fixed priority order
    pub const PRIORITY: [ProviderId; 3] = [
        ProviderId::HuggingFace,
        ProviderId::Cohere,
        ProviderId::Ollama,
    ];

    /// Stable string identifier, used for routing and logging
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::HuggingFace => "huggingface",
            ProviderId::Cohere => "cohere",
            ProviderId::Ollama => "ollama",
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller preference for which provider handles a request
///
/// `Auto` lets the orchestrator walk the fixed priority order directly;
/// naming a provider moves it to the front of the candidate list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderPreference {
    /// No preference, use the fixed priority order
    #[default]
    Auto,
    /// Prefer Hugging Face
    HuggingFace,
    /// Prefer Cohere
    Cohere,
    /// Prefer Ollama
    Ollama,
}

impl ProviderPreference {
    /// The preferred provider, if one was named
    pub fn id(&self) -> Option<ProviderId> {
        match self {
            ProviderPreference::Auto => None,
            ProviderPreference::HuggingFace => Some(ProviderId::HuggingFace),
            ProviderPreference::Cohere => Some(ProviderId::Cohere),
            ProviderPreference::Ollama => Some(ProviderId::Ollama),
        }
    }
}

impl From<ProviderId> for ProviderPreference {
    fn from(id: ProviderId) -> Self {
        match id {
            ProviderId::HuggingFace => ProviderPreference::HuggingFace,
            ProviderId::Cohere => ProviderPreference::Cohere,
            ProviderId::Ollama => ProviderPreference::Ollama,
        }
    }
}

/// Snapshot of a provider's availability
///
/// Derived from the environment at registry construction and fixed for the
/// life of the process; it does not change during a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderCapability {
    /// Which provider this describes
    pub id: ProviderId,
    /// Whether the required credential or base URL was present
    pub configured: bool,
}

/// Per-request metadata used for log correlation
///
/// Created once per `generate` call, never persisted.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique request identifier
    pub request_id: String,
    /// When the request entered the orchestrator
    pub start_time: DateTime<Utc>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            start_time: Utc::now(),
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
