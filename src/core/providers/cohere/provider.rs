//! Cohere provider implementation

use async_trait::async_trait;

use crate::core::traits::GenerationProvider;
use crate::core::types::{
    Completion, GenerationRequest, ProviderError, ProviderId, RequestContext,
};

use super::client::CohereClient;
use super::config::CohereConfig;

/// Static trust score for results produced through this provider
pub const CONFIDENCE: f32 = 0.85;

/// Cohere generate API provider
#[derive(Debug, Clone)]
pub struct CohereProvider {
    config: CohereConfig,
    client: CohereClient,
}

impl CohereProvider {
    pub fn new(config: CohereConfig) -> Result<Self, ProviderError> {
        let client = CohereClient::new(config.clone())?;
        Ok(Self { config, client })
    }

    pub fn from_env() -> Result<Self, ProviderError> {
        Self::new(CohereConfig::from_env()?)
    }
}

#[async_trait]
impl GenerationProvider for CohereProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Cohere
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
