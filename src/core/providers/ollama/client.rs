//! Ollama HTTP client

use std::time::Duration;

use reqwest::{Client, ClientBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::core::types::{Completion, GenerationRequest, ProviderError, TokenUsage};

use super::config::OllamaConfig;

const PROVIDER: &str = "ollama";

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
    #[serde(default)]
    prompt_eval_count: Option<u32>,
    #[serde(default)]
    eval_count: Option<u32>,
}

/// Thin HTTP client over a local Ollama server
#[derive(Debug, Clone)]
pub struct OllamaClient {
    config: OllamaConfig,
    http_client: Client,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Result<Self, ProviderError> {
        config.validate()?;

        let http_client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .build()
            .map_err(|e| {
                ProviderError::network(PROVIDER, format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Run one non-streaming generation request
    pub async fn generate(
        &self,
        model: &str,
        request: &GenerationRequest,
    ) -> Result<Completion, ProviderError> {
        let url = self.config.endpoint_url("/api/generate");
        debug!(url = %url, model = %model, "sending ollama generate request");

        let body = json!({
            "model": model,
            "prompt": request.prompt,
            "stream": false,
            "options": {
                "num_predict": request.max_tokens,
                "temperature": request.temperature,
            },
        });

        let response = tokio::time::timeout(
            Duration::from_secs(self.config.request_timeout),
            self.http_client.post(&url).json(&body).send(),
        )
        .await
        .map_err(|_| ProviderError::timeout(PROVIDER, "request timed out"))?
        .map_err(|e| ProviderError::network(PROVIDER, format!("Network error: {e}")))?;

        let parsed = handle_response(response).await?;

        let mut completion = Completion::new(parsed.response);
        if let (Some(input), Some(output)) = (parsed.prompt_eval_count, parsed.eval_count) {
            completion = completion.with_usage(TokenUsage::new(input, output));
        }

        Ok(completion)
    }
}

async fn handle_response(response: Response) -> Result<GenerateResponse, ProviderError> {
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        // Ollama answers 404 for a model that has not been pulled
        let message = response.text().await.unwrap_or_default();
        return Err(ProviderError::api(PROVIDER, 404, message));
    }

    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(ProviderError::api(PROVIDER, status.as_u16(), message));
    }

    response
        .json()
        .await
        .map_err(|e| ProviderError::parsing(PROVIDER, format!("Invalid JSON body: {e}")))
}
