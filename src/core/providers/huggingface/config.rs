//! Hugging Face Inference API configuration

use std::env;

use crate::core::types::ProviderError;

/// Default hosted inference endpoint
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Default text-generation checkpoint
pub const DEFAULT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.2";

/// Configuration for the Hugging Face provider
#[derive(Debug, Clone)]
pub struct HuggingFaceConfig {
    /// API token
    pub api_key: Option<String>,
    /// Inference endpoint base URL
    pub base_url: String,
    /// Model used when the request carries no hint
    pub default_model: String,
    /// Whole-request timeout in seconds
    pub request_timeout: u64,
    /// Connection timeout in seconds
    pub connect_timeout: u64,
}

impl Default for HuggingFaceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            request_timeout: 30,
            connect_timeout: 10,
        }
    }
}

impl HuggingFaceConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Read configuration from the process environment
    ///
    /// Requires `HUGGINGFACE_API_KEY` (or the `HF_API_TOKEN` alias); the
    /// provider is considered unconfigured without one.
    pub fn from_env() -> Result<Self, ProviderError> {
        let mut config = Self::default();

        config.api_key = env::var("HUGGINGFACE_API_KEY")
            .or_else(|_| env::var("HF_API_TOKEN"))
            .map(Some)
            .map_err(|_| ProviderError::not_configured("huggingface"))?;

        if let Ok(base_url) = env::var("HUGGINGFACE_BASE_URL") {
            config.base_url = base_url;
        }

        if let Ok(model) = env::var("HUGGINGFACE_MODEL") {
            config.default_model = model;
        }

        if let Ok(timeout) = env::var("HUGGINGFACE_TIMEOUT") {
            config.request_timeout = timeout.parse().unwrap_or(30);
        }

        Ok(config)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
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

    /// Absolute URL for a model endpoint
    pub fn model_url(&self, model: &str) -> String {
        format!("{}/models/{}", self.base_url.trim_end_matches('/'), model)
    }

    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.api_key.as_deref().map_or(true, str::is_empty) {
            return Err(ProviderError::configuration(
                "huggingface",
                "API key is required",
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ProviderError::configuration(
                "huggingface",
                "Base URL must start with http:// or https://",
            ));
        }

        if self.request_timeout == 0 {
            return Err(ProviderError::configuration(
                "huggingface",
                "Request timeout must be greater than 0",
            ));
        }

        Ok(())
    }
}
