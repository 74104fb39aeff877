//! Core provider trait
//!
//! Defines the unified interface every AI provider implements. The trait is
//! object safe so the registry can hold heterogeneous providers behind
//! `Arc<dyn GenerationProvider>` and the orchestrator can walk them as a
//! plain ordered list.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::core::types::{
    Completion, GenerationRequest, ProviderError, ProviderId, RequestContext,
};

/// Unified text-generation interface
///
/// Implementations own their HTTP plumbing, default model selection, and
/// any model-hint routing; the orchestrator only sees `generate`.
#[async_trait]
pub trait GenerationProvider: Send + Sync + Debug {
    /// Which provider this is
    fn id(&self) -> ProviderId;

    /// Stable name used for routing and logging
    fn name(&self) -> &'static str {
        self.id().as_str()
    }

    /// Static trust score attached to results from this provider
    ///
    /// A fixed constant per provider, not a computed probability; the
    /// orchestrator copies it into the result untouched.
    fn confidence(&self) -> f32;

    /// Whether this provider can serve the given model hint
    fn supports_model(&self, _model: &str) -> bool {
        true
    }

    /// Execute one generation attempt
    ///
    /// Exactly one network call; retry policy belongs to the caller (and
    /// the orchestrator deliberately has none). Errors carry the provider
    /// tag so the orchestrator can log abandonment without extra context.
    async fn generate(
        &self,
        request: &GenerationRequest,
        context: &RequestContext,
    ) -> Result<Completion, ProviderError>;
}
