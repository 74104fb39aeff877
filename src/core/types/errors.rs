//! Provider error taxonomy
//!
//! Every failure a provider call can produce is expressed here. Errors are
//! absorbed at the orchestrator boundary: nothing above it ever observes a
//! `ProviderError`, the only visible signal of total failure is a fallback
//! result.

use thiserror::Error;

/// Unified error type for all provider calls
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("Authentication failed for {provider}: {message}")]
    Authentication {
        provider: &'static str,
        message: String,
    },

    #[error("Rate limit exceeded for {provider}: {message}")]
    RateLimit {
        provider: &'static str,
        message: String,
        /// Seconds to wait before retrying, if the provider reported one
        retry_after: Option<u64>,
    },

    #[error("API error from {provider} (status {status}): {message}")]
    Api {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("Network error for {provider}: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    #[error("Timeout for {provider}: {message}")]
    Timeout {
        provider: &'static str,
        message: String,
    },

    #[error("Failed to parse {provider} response: {message}")]
    Parsing {
        provider: &'static str,
        message: String,
    },

    #[error("Provider {provider} returned an empty completion")]
    EmptyCompletion { provider: &'static str },

    #[error("Provider {provider} is not configured")]
    NotConfigured { provider: &'static str },

    #[error("Configuration error for {provider}: {message}")]
    Configuration {
        provider: &'static str,
        message: String,
    },

    #[error("Invalid request for {provider}: {message}")]
    InvalidRequest {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    pub fn authentication(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Authentication {
            provider,
            message: message.into(),
        }
    }

    pub fn rate_limit(
        provider: &'static str,
        message: impl Into<String>,
        retry_after: Option<u64>,
    ) -> Self {
        Self::RateLimit {
            provider,
            message: message.into(),
            retry_after,
        }
    }

    pub fn api(provider: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            provider,
            status,
            message: message.into(),
        }
    }

    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    pub fn timeout(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Timeout {
            provider,
            message: message.into(),
        }
    }

    pub fn parsing(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Parsing {
            provider,
            message: message.into(),
        }
    }

    pub fn empty_completion(provider: &'static str) -> Self {
        Self::EmptyCompletion { provider }
    }

    pub fn not_configured(provider: &'static str) -> Self {
        Self::NotConfigured { provider }
    }

    pub fn configuration(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            provider,
            message: message.into(),
        }
    }

    pub fn invalid_request(provider: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            provider,
            message: message.into(),
        }
    }

    /// The provider this error came from
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Authentication { provider, .. }
            | Self::RateLimit { provider, .. }
            | Self::Api { provider, .. }
            | Self::Network { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::Parsing { provider, .. }
            | Self::EmptyCompletion { provider }
            | Self::NotConfigured { provider }
            | Self::Configuration { provider, .. }
            | Self::InvalidRequest { provider, .. } => provider,
        }
    }
}
