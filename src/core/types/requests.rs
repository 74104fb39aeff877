//! Generation request type

use serde::{Deserialize, Serialize};

use super::common::ProviderPreference;

/// Default token budget when the caller does not specify one
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// A single text-generation request
///
/// Built once per call site via [`GenerationRequest::new`] and the
/// consuming `with_*` methods, then treated as immutable: the orchestrator
/// passes the same request by shared reference to every candidate it tries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Prompt text sent to the provider
    pub prompt: String,
    /// Which provider the caller would like to handle the request
    #[serde(default)]
    pub preferred: ProviderPreference,
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature, clamped to `0.0..=1.0`
    pub temperature: f32,
    /// Optional model hint, interpreted per provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl GenerationRequest {
    /// Create a request with default options
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            preferred: ProviderPreference::Auto,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            model: None,
        }
    }

    /// Set the preferred provider
    pub fn with_preferred(mut self, preferred: ProviderPreference) -> Self {
        self.preferred = preferred;
        self
    }

    /// Set the token budget
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the sampling temperature, clamped to `0.0..=1.0`
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature.clamp(0.0, 1.0);
        self
    }

    /// Set a model hint
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}
