//! Ollama server configuration

use std::env;

use crate::core::types::ProviderError;

/// Default generation model
pub const DEFAULT_MODEL: &str = "llama3";

/// Configuration for a local Ollama server
///
/// Ollama needs no credential; presence of a base URL in the environment
/// is what makes the provider configured.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Server base URL, e.g. `http://localhost:11434`
    pub base_url: String,
    /// Model used when the request carries no hint
    pub default_model: String,
    /// Whole-request timeout in seconds
    ///
    /// Local generation is slow on modest hardware, so the default is
    /// generous compared to the hosted providers.
    pub request_timeout: u64,
    /// Connection timeout in seconds
    pub connect_timeout: u64,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            default_model: DEFAULT_MODEL.to_string(),
            request_timeout: 120,
            connect_timeout: 5,
        }
    }
}

impl OllamaConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Read configuration from the process environment
    ///
    /// Requires `OLLAMA_BASE_URL`; the provider is considered unconfigured
    /// without one.
    pub fn from_env() -> Result<Self, ProviderError> {
        let base_url =
            env::var("OLLAMA_BASE_URL").map_err(|_| ProviderError::not_configured("ollama"))?;

        let mut config = Self::new(base_url);

        if let Ok(model) = env::var("OLLAMA_MODEL") {
            config.default_model = model;
        }

        if let Ok(timeout) = env::var("OLLAMA_TIMEOUT") {
            config.request_timeout = timeout.parse().unwrap_or(120);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout = seconds;
        self
    }

    /// Absolute URL for an API endpoint
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.base_url.is_empty() {
            return Err(ProviderError::configuration("ollama", "Base URL is required"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ProviderError::configuration(
                "ollama",
                "Base URL must start with http:// or https://",
            ));
        }

        if self.request_timeout == 0 {
            return Err(ProviderError::configuration(
                "ollama",
                "Request timeout must be greater than 0",
            ));
        }

        Ok(())
    }
}
