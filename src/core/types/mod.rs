//! Core type definitions
//!
//! Request/response shapes, provider identity, and the error taxonomy
//! shared by every provider and the orchestrator.

pub mod common;
pub mod errors;
pub mod requests;
pub mod responses;

pub use common::{ProviderCapability, ProviderId, ProviderPreference, RequestContext};
pub use errors::ProviderError;
pub use requests::{GenerationRequest, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
pub use responses::{Completion, GenerationResult, TokenUsage, FALLBACK_PROVIDER_NAME};
