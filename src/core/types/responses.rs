//! Generation response types

use serde::{Deserialize, Serialize};

/// Name reported in [`GenerationResult::provider_used`] when no provider
/// produced an answer
pub const FALLBACK_PROVIDER_NAME: &str = "fallback";

/// Token accounting reported by a provider, when available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Prompt token count
    pub input_tokens: u32,
    /// Generated token count
    pub output_tokens: u32,
    /// Total token count
    pub total_tokens: u32,
}

impl TokenUsage {
    pub fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens: input_tokens + output_tokens,
        }
    }
}

/// Raw success value returned by a provider's `generate` call
///
/// Provider internal; the orchestrator wraps it into a [`GenerationResult`]
/// before anything crosses the public boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    /// Generated text
    pub text: String,
    /// Token usage, if the provider reported it
    pub usage: Option<TokenUsage>,
}

impl Completion {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: None,
        }
    }

    pub fn with_usage(mut self, usage: TokenUsage) -> Self {
        self.usage = Some(usage);
        self
    }
}

/// Final result of a generation request
///
/// Invariant: `is_fallback` is true if and only if `provider_used` equals
/// [`FALLBACK_PROVIDER_NAME`]. The two constructors are the only way to
/// build a result, so the pair cannot drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Generated (or canned) text
    pub content: String,
    /// Name of the provider that produced the content
    pub provider_used: String,
    /// Static trust score assigned by the producing provider
    pub confidence: f32,
    /// Token usage, if the provider reported it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
    /// Whether this result came from the deterministic fallback
    pub is_fallback: bool,
}

impl GenerationResult {
    /// Wrap a provider completion
    pub fn from_provider(provider: &str, confidence: f32, completion: Completion) -> Self {
        Self {
            content: completion.text,
            provider_used: provider.to_string(),
            confidence,
            usage: completion.usage,
            is_fallback: false,
        }
    }

    /// Build a deterministic fallback result
    pub fn fallback(content: impl Into<String>, confidence: f32) -> Self {
        Self {
            content: content.into(),
            provider_used: FALLBACK_PROVIDER_NAME.to_string(),
            confidence,
            usage: None,
            is_fallback: true,
        }
    }
}
