//! # pathlight
//!
//! Multi-provider AI text generation with graceful degradation, built for
//! career-guidance services.
//!
//! ## Features
//!
//! - **Provider chain**: tries Hugging Face, Cohere, and Ollama in a fixed
//!   priority order, honoring a per-request preference
//! - **Never fails**: every internal error is absorbed; exhausting the
//!   chain yields a deterministic, keyword-selected canned response
//! - **Construct once**: providers resolve from the environment at process
//!   start; the orchestrator holds no mutable state and is shared freely
//!   across concurrent requests
//! - **Typed task helpers**: roadmap generation, quiz analysis, resume
//!   parsing, and job matching, each with its own structured fallback
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pathlight::{GenerationRequest, Orchestrator, ProviderPreference};
//!
//! #[tokio::main]
//! async fn main() {
//!     // Reads HUGGINGFACE_API_KEY / COHERE_API_KEY / OLLAMA_BASE_URL
//!     let orchestrator = Orchestrator::from_env();
//!
//!     let request = GenerationRequest::new("How do I get into a good college?")
//!         .with_preferred(ProviderPreference::Auto)
//!         .with_max_tokens(500);
//!
//!     let result = orchestrator.generate(&request).await;
//!     println!(
//!         "[{} confidence {:.2}] {}",
//!         result.provider_used, result.confidence, result.content
//!     );
//! }
//! ```

#![warn(clippy::all)]

pub mod core;
pub mod utils;

// Re-export the main types at the crate root
pub use crate::core::orchestrator::{Orchestrator, FALLBACK_CONFIDENCE};
pub use crate::core::providers::cohere::{CohereConfig, CohereProvider};
pub use crate::core::providers::huggingface::{HuggingFaceConfig, HuggingFaceProvider};
pub use crate::core::providers::ollama::{OllamaConfig, OllamaProvider};
pub use crate::core::providers::ProviderRegistry;
pub use crate::core::traits::GenerationProvider;
pub use crate::core::types::{
    Completion, GenerationRequest, GenerationResult, ProviderCapability, ProviderError,
    ProviderId, ProviderPreference, RequestContext, TokenUsage, FALLBACK_PROVIDER_NAME,
};
