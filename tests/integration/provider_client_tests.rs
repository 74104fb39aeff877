//! Provider client tests against wiremock stubs
//!
//! Exercise the real HTTP clients: happy paths, auth failures, rate
//! limits, malformed bodies, and the Hugging Face model-hint routing.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pathlight::{
    CohereConfig, CohereProvider, GenerationProvider, GenerationRequest, HuggingFaceConfig,
    HuggingFaceProvider, OllamaConfig, OllamaProvider, ProviderError, RequestContext,
};

fn request(prompt: &str) -> GenerationRequest {
    GenerationRequest::new(prompt).with_max_tokens(64)
}

#[tokio::test]
async fn test_huggingface_text_generation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/mistralai/Mistral-7B-Instruct-v0.2"))
        .and(header("authorization", "Bearer hf_test"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"generated_text": "hello there"}])),
        )
        .mount(&server)
        .await;

    let provider = HuggingFaceProvider::new(
        HuggingFaceConfig::new("hf_test").with_base_url(server.uri()),
    )
    .unwrap();

    let completion = provider
        .generate(&request("hi"), &RequestContext::new())
        .await
        .unwrap();

    assert_eq!(completion.text, "hello there");
    assert!(completion.usage.is_none());
}

#[tokio::test]
async fn test_huggingface_question_answering_routing() {
    let server = MockServer::start().await;

    // A QA-style model hint must produce a question/context payload
    Mock::given(method("POST"))
        .and(path("/models/deepset/roberta-base-squad2"))
        .and(body_partial_json(json!({
            "inputs": {"question": "What suits me?"}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"answer": "engineering", "score": 0.91})),
        )
        .mount(&server)
        .await;

    let provider = HuggingFaceProvider::new(
        HuggingFaceConfig::new("hf_test").with_base_url(server.uri()),
    )
    .unwrap();

    let completion = provider
        .generate(
            &request("What suits me?").with_model("deepset/roberta-base-squad2"),
            &RequestContext::new(),
        )
        .await
        .unwrap();

    assert_eq!(completion.text, "engineering");
}

#[tokio::test]
async fn test_huggingface_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .mount(&server)
        .await;

    let provider = HuggingFaceProvider::new(
        HuggingFaceConfig::new("hf_bad").with_base_url(server.uri()),
    )
    .unwrap();

    let error = provider
        .generate(&request("hi"), &RequestContext::new())
        .await
        .unwrap_err();

    assert!(matches!(error, ProviderError::Authentication { .. }));
}

#[tokio::test]
async fn test_huggingface_rate_limited_with_retry_after() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "30")
                .set_body_string("rate limited"),
        )
        .mount(&server)
        .await;

    let provider = HuggingFaceProvider::new(
        HuggingFaceConfig::new("hf_test").with_base_url(server.uri()),
    )
    .unwrap();

    let error = provider
        .generate(&request("hi"), &RequestContext::new())
        .await
        .unwrap_err();

    match error {
        ProviderError::RateLimit { retry_after, .. } => assert_eq!(retry_after, Some(30)),
        other => panic!("expected rate limit error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_cohere_generate_with_usage() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/generate"))
        .and(header("authorization", "Bearer co_test"))
        .and(body_partial_json(json!({"model": "command", "max_tokens": 64})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "generations": [{"text": "cohere says hi"}],
            "meta": {"billed_units": {"input_tokens": 3, "output_tokens": 5}}
        })))
        .mount(&server)
        .await;

    let provider =
        CohereProvider::new(CohereConfig::new("co_test").with_base_url(server.uri())).unwrap();

    let completion = provider
        .generate(&request("hi"), &RequestContext::new())
        .await
        .unwrap();

    assert_eq!(completion.text, "cohere says hi");
    let usage = completion.usage.unwrap();
    assert_eq!(usage.input_tokens, 3);
    assert_eq!(usage.output_tokens, 5);
    assert_eq!(usage.total_tokens, 8);
}

#[tokio::test]
async fn test_cohere_malformed_body_is_parsing_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let provider =
        CohereProvider::new(CohereConfig::new("co_test").with_base_url(server.uri())).unwrap();

    let error = provider
        .generate(&request("hi"), &RequestContext::new())
        .await
        .unwrap_err();

    assert!(matches!(error, ProviderError::Parsing { .. }));
}

#[tokio::test]
async fn test_cohere_empty_generations_is_parsing_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"generations": []})))
        .mount(&server)
        .await;

    let provider =
        CohereProvider::new(CohereConfig::new("co_test").with_base_url(server.uri())).unwrap();

    let error = provider
        .generate(&request("hi"), &RequestContext::new())
        .await
        .unwrap_err();

    assert!(matches!(error, ProviderError::Parsing { .. }));
}

#[tokio::test]
async fn test_ollama_generate_with_usage() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(json!({"model": "llama3", "stream": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "local answer",
            "prompt_eval_count": 2,
            "eval_count": 4
        })))
        .mount(&server)
        .await;

    let provider = OllamaProvider::new(OllamaConfig::new(server.uri())).unwrap();

    let completion = provider
        .generate(&request("hi"), &RequestContext::new())
        .await
        .unwrap();

    assert_eq!(completion.text, "local answer");
    assert_eq!(completion.usage.unwrap().total_tokens, 6);
}

#[tokio::test]
async fn test_ollama_missing_model_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(404).set_body_string("model not found"))
        .mount(&server)
        .await;

    let provider = OllamaProvider::new(OllamaConfig::new(server.uri())).unwrap();

    let error = provider
        .generate(&request("hi"), &RequestContext::new())
        .await
        .unwrap_err();

    match error {
        ProviderError::Api { status, .. } => assert_eq!(status, 404),
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_orchestrator_falls_through_real_clients() {
    use pathlight::{Orchestrator, ProviderRegistry};
    use std::sync::Arc;

    // Hugging Face stub answers 500, Cohere stub answers normally
    let hf_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&hf_server)
        .await;

    let cohere_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "generations": [{"text": "cohere rescue"}]
        })))
        .mount(&cohere_server)
        .await;

    let registry = ProviderRegistry::new(vec![
        Arc::new(
            HuggingFaceProvider::new(
                HuggingFaceConfig::new("hf_test").with_base_url(hf_server.uri()),
            )
            .unwrap(),
        ),
        Arc::new(
            CohereProvider::new(CohereConfig::new("co_test").with_base_url(cohere_server.uri()))
                .unwrap(),
        ),
    ]);

    let result = Orchestrator::new(registry)
        .generate(&GenerationRequest::new("hi"))
        .await;

    assert!(!result.is_fallback);
    assert_eq!(result.provider_used, "cohere");
    assert_eq!(result.content, "cohere rescue");
}
