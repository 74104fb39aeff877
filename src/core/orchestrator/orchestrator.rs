//! Provider orchestrator
//!
//! Walks the ordered candidate list for a request, one sequential attempt
//! per provider, and degrades to the deterministic keyword fallback when
//! every attempt fails. The `generate` boundary is infallible: no error
//! from this subsystem is ever observable above it.

use tracing::{info, warn};

use crate::core::providers::ProviderRegistry;
use crate::core::types::{GenerationRequest, GenerationResult, RequestContext};

use super::fallback;

/// Orchestrates generation across the configured providers
///
/// Constructed once at process start and shared by reference; it holds no
/// mutable state, so concurrent `generate` calls need no synchronization.
#[derive(Debug, Clone, Default)]
pub struct Orchestrator {
    registry: ProviderRegistry,
}

impl Orchestrator {
    /// Build an orchestrator over an explicit registry
    pub fn new(registry: ProviderRegistry) -> Self {
        Self { registry }
    }

    /// Build an orchestrator from the process environment
    pub fn from_env() -> Self {
        Self::new(ProviderRegistry::from_env())
    }

    /// The registry this orchestrator routes over
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Produce a result for the request, never failing
    ///
    /// Candidates are tried strictly in order, exactly one attempt each,
    /// at most one call in flight at a time. A completion whose text is
    /// blank counts as a failure and advances to the next candidate. When
    /// the list is exhausted - including the zero-providers case - the
    /// keyword fallback supplies the result.
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        let context = RequestContext::new();
        let candidates = self.registry.candidates(request.preferred);

        for provider in candidates {
            match provider.generate(request, &context).await {
                Ok(completion) if completion.text.trim().is_empty() => {
                    warn!(
                        request_id = %context.request_id,
                        provider = provider.name(),
                        "provider returned empty completion, trying next candidate"
                    );
                }
                Ok(completion) => {
                    info!(
                        request_id = %context.request_id,
                        provider = provider.name(),
                        "generation succeeded"
                    );
                    return GenerationResult::from_provider(
                        provider.name(),
                        provider.confidence(),
                        completion,
                    );
                }
                Err(err) => {
                    warn!(
                        request_id = %context.request_id,
                        provider = provider.name(),
                        error = %err,
                        "provider call failed, trying next candidate"
                    );
                }
            }
        }

        info!(
            request_id = %context.request_id,
            "all candidates exhausted, using keyword fallback"
        );
        fallback::synthesize(&request.prompt)
    }
}
