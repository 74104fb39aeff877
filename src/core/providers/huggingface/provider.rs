//! Hugging Face provider implementation

use async_trait::async_trait;
use tracing::debug;

use crate::core::traits::GenerationProvider;
use crate::core::types::{
    Completion, GenerationRequest, ProviderError, ProviderId, RequestContext,
};

use super::client::HuggingFaceClient;
use super::config::HuggingFaceConfig;

/// Static trust score for results produced through this provider
pub const CONFIDENCE: f32 = 0.80;

/// Hugging Face Inference API provider
///
/// Model hints that name an extractive-QA checkpoint are routed to the
/// question-answering task; everything else goes through text generation.
/// The routing is internal and both paths yield the same completion shape.
#[derive(Debug, Clone)]
pub struct HuggingFaceProvider {
    config: HuggingFaceConfig,
    client: HuggingFaceClient,
}

impl HuggingFaceProvider {
    pub fn new(config: HuggingFaceConfig) -> Result<Self, ProviderError> {
        let client = HuggingFaceClient::new(config.clone())?;
        Ok(Self { config, client })
    }

    pub fn from_env() -> Result<Self, ProviderError> {
        Self::new(HuggingFaceConfig::from_env()?)
    }

    fn is_question_answering_model(model: &str) -> bool {
        let model = model.to_lowercase();
        model.contains("squad") || model.contains("roberta")
    }
}

#[async_trait]
impl GenerationProvider for HuggingFaceProvider {
    fn id(&self) -> ProviderId {
        ProviderId::HuggingFace
    }

    fn confidence(&self) -> f32 {
        CONFIDENCE
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
        context: &RequestContext,
    ) -> Result<Completion, ProviderError> {
        let model = request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model);

        if Self::is_question_answering_model(model) {
            debug!(
                request_id = %context.request_id,
                model = %model,
                "routing to question-answering task"
            );
            self.client.question_answering(model, request).await
        } else {
            self.client.text_generation(model, request).await
        }
    }
}
