//! Hugging Face Inference API client

use std::time::Duration;

use reqwest::{Client, ClientBuilder, Response, StatusCode};
use serde_json::{json, Value};
use tokio::time::timeout;
use tracing::debug;

use crate::core::types::{Completion, GenerationRequest, ProviderError};

use super::config::HuggingFaceConfig;

const PROVIDER: &str = "huggingface";

/// Thin HTTP client over the hosted inference endpoints
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    config: HuggingFaceConfig,
    http_client: Client,
}

impl HuggingFaceClient {
    pub fn new(config: HuggingFaceConfig) -> Result<Self, ProviderError> {
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

    /// Run a text-generation task
    pub async fn text_generation(
        &self,
        model: &str,
        request: &GenerationRequest,
    ) -> Result<Completion, ProviderError> {
        let body = json!({
            "inputs": request.prompt,
            "parameters": {
                "max_new_tokens": request.max_tokens,
                "temperature": request.temperature,
                "return_full_text": false,
            },
        });

        let response = self.send(model, body).await?;

        // The inference API answers with a one-element array for this task
        let text = response
            .as_array()
            .and_then(|items| items.first())
            .and_then(|item| item.get("generated_text"))
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ProviderError::parsing(PROVIDER, "missing generated_text in response")
            })?;

        Ok(Completion::new(text))
    }

    /// Run an extractive question-answering task
    ///
    /// The answer span is wrapped into the same plain-text completion shape
    /// as a generative call.
    pub async fn question_answering(
        &self,
        model: &str,
        request: &GenerationRequest,
    ) -> Result<Completion, ProviderError> {
        let body = json!({
            "inputs": {
                "question": request.prompt,
                "context": request.prompt,
            },
        });

        let response = self.send(model, body).await?;

        let answer = response
            .get("answer")
            .and_then(Value::as_str)
            .ok_or_else(|| ProviderError::parsing(PROVIDER, "missing answer in response"))?;

        Ok(Completion::new(answer))
    }

    async fn send(&self, model: &str, body: Value) -> Result<Value, ProviderError> {
        let url = self.config.model_url(model);
        debug!(url = %url, "sending huggingface inference request");

        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::not_configured(PROVIDER))?;

        let response = timeout(
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

        handle_response(response).await
    }
}

async fn handle_response(response: Response) -> Result<Value, ProviderError> {
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
