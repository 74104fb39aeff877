//! Ollama provider implementation

use async_trait::async_trait;

use crate::core::traits::GenerationProvider;
use crate::core::types::{
    Completion, GenerationRequest, ProviderError, ProviderId, RequestContext,
};

use super::client::OllamaClient;
use super::config::OllamaConfig;

/// Static trust score for results produced through this provider
pub const CONFIDENCE: f32 = 0.75;

/// Local Ollama server provider
#[derive(Debug, Clone)]
pub struct OllamaProvider {
    config: OllamaConfig,
    client: OllamaClient,
}

impl OllamaProvider {
    pub fn new(config: OllamaConfig) -> Result<Self, ProviderError> {
        let client = OllamaClient::new(config.clone())?;
        Ok(Self { config, client })
    }

    pub fn from_env() -> Result<Self, ProviderError> {
        Self::new(OllamaConfig::from_env()?)
    }
}

#[async_trait]
impl GenerationProvider for OllamaProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Ollama
    }

    fn confidence(&self) -> f32 {
        CONFIDENCE
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
        _context: &RequestContext,
    ) -> Result<Completion, ProviderError> {
        let model = request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model);

        self.client.generate(model, request).await
    }
}
