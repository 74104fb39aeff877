//! Cohere API client

use std::time::Duration;

use reqwest::{Client, ClientBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::core::types::{Completion, GenerationRequest, ProviderError, TokenUsage};

use super::config::CohereConfig;

const PROVIDER: &str = "cohere";

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    generations: Vec<Generation>,
    #[serde(default)]
    meta: Option<Meta>,
}

#[derive(Debug, Deserialize)]
struct Generation {
    text: String,
}

#[derive(Debug, Deserialize)]
struct Meta {
    #[serde(default)]
    billed_units: Option<BilledUnits>,
}

#[derive(Debug, Deserialize)]
struct BilledUnits {
    #[serde(default)]
    input_tokens: u32,
    #[serde(default)]
    output_tokens: u32,
}

/// Thin HTTP client over the Cohere generate endpoint
#[derive(Debug, Clone)]
pub struct CohereClient {
    config: CohereConfig,
    http_client: Client,
}

impl CohereClient {
    pub fn new(config: CohereConfig) -> Result<Self, ProviderError> {
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

    /// Run one generation request
    pub async fn generate(
        &self,
        model: &str,
        request: &GenerationRequest,
    ) -> Result<Completion, ProviderError> {
        let url = self.config.endpoint_url("/v1/generate");
        debug!(url = %url, model = %model, "sending cohere generate request");

        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::not_configured(PROVIDER))?;

        let body = json!({
            "model": model,
            "prompt": request.prompt,
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
        });

        let response = tokio::time::timeout(
            Duration::from_secs(self.config.request_timeout),
            self.http_client
                .post(&url)
                .bearer_auth(api_key)
                .json(&body)
                .send(),
        )
        .await
        .map_err(|_| ProviderError::timeout(PROVIDER, "request timed out"))?
        .map_err(|e| ProviderError::network(PROVIDER, format!("Network error: {e}")))?;

        let parsed = handle_response(response).await?;

        let generation = parsed
            .generations
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::parsing(PROVIDER, "no generations in response"))?;

        let usage = parsed
            .meta
            .and_then(|m| m.billed_units)
            .map(|u| TokenUsage::new(u.input_tokens, u.output_tokens));

        let mut completion = Completion::new(generation.text);
        if let Some(usage) = usage {
            completion = completion.with_usage(usage);
        }

        Ok(completion)
    }
}

async fn handle_response(response: Response) -> Result<GenerateResponse, ProviderError> {
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        let message = response.text().await.unwrap_or_default();
        return Err(ProviderError::authentication(PROVIDER, message));
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());
        let message = response.text().await.unwrap_or_default();
        return Err(ProviderError::rate_limit(PROVIDER, message, retry_after));
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
