//! Provider registry
//!
//! Holds the providers whose configuration resolved at process start, in
//! fixed priority order, and builds the ordered candidate list for a
//! request. The registry is immutable after construction; concurrent
//! `generate` calls share it by reference.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::core::providers::cohere::CohereProvider;
use crate::core::providers::huggingface::HuggingFaceProvider;
use crate::core::providers::ollama::OllamaProvider;
use crate::core::traits::GenerationProvider;
use crate::core::types::{ProviderCapability, ProviderError, ProviderId, ProviderPreference};

/// Immutable set of configured providers
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    /// Configured providers, ordered by [`ProviderId::PRIORITY`]
    providers: Vec<Arc<dyn GenerationProvider>>,
}

impl ProviderRegistry {
    /// Build a registry from an explicit provider list
    ///
    /// Providers are reordered into fixed priority order and duplicates by
    /// id are dropped, so candidate ordering never depends on insertion
    /// order.
    pub fn new(providers: Vec<Arc<dyn GenerationProvider>>) -> Self {
        let mut ordered: Vec<Arc<dyn GenerationProvider>> = Vec::with_capacity(providers.len());

        for id in ProviderId::PRIORITY {
            if let Some(provider) = providers.iter().find(|p| p.id() == id) {
                ordered.push(Arc::clone(provider));
            }
        }

        Self { providers: ordered }
    }

    /// Build a registry from the process environment
    ///
    /// Each provider whose credential/base URL is present gets registered;
    /// missing configuration skips the provider silently. A present but
    /// invalid configuration is logged as a warning and the provider is
    /// skipped as well.
    pub fn from_env() -> Self {
        // Pick up a .env file when one exists; real environment wins
        dotenvy::dotenv().ok();

        let mut providers: Vec<Arc<dyn GenerationProvider>> = Vec::new();

        for id in ProviderId::PRIORITY {
            match build_from_env(id) {
                Ok(provider) => {
                    info!(provider = %id, "registered provider");
                    providers.push(provider);
                }
                Err(ProviderError::NotConfigured { .. }) => {
                    debug!(provider = %id, "provider not configured, skipping");
                }
                Err(err) => {
                    warn!(provider = %id, error = %err, "provider configuration invalid, skipping");
                }
            }
        }

        Self { providers }
    }

    /// Whether any provider is configured
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Number of configured providers
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Look up a configured provider
    pub fn get(&self, id: ProviderId) -> Option<&Arc<dyn GenerationProvider>> {
        self.providers.iter().find(|p| p.id() == id)
    }

    /// Whether the given provider was configured at construction
    pub fn is_configured(&self, id: ProviderId) -> bool {
        self.get(id).is_some()
    }

    /// Whether a configured provider can serve the given model hint
    pub fn supports_model(&self, id: ProviderId, model: &str) -> bool {
        self.get(id).is_some_and(|p| p.supports_model(model))
    }

    /// Capability snapshot for every known provider
    pub fn capabilities(&self) -> Vec<ProviderCapability> {
        ProviderId::PRIORITY
            .into_iter()
            .map(|id| ProviderCapability {
                id,
                configured: self.is_configured(id),
            })
            .collect()
    }

    /// Ordered candidate list for one request
    ///
    /// The preferred provider (when named and configured) comes first,
    /// followed by the remaining configured providers in fixed priority
    /// order. `Auto` yields the priority order directly. Deterministic for
    /// an unchanged registry.
    pub fn candidates(&self, preference: ProviderPreference) -> Vec<Arc<dyn GenerationProvider>> {
        let preferred = preference.id();
        let mut candidates = Vec::with_capacity(self.providers.len());

        if let Some(id) = preferred {
            if let Some(provider) = self.get(id) {
                candidates.push(Arc::clone(provider));
            }
        }

        for provider in &self.providers {
            if Some(provider.id()) != preferred {
                candidates.push(Arc::clone(provider));
            }
        }

        candidates
    }
}

fn build_from_env(id: ProviderId) -> Result<Arc<dyn GenerationProvider>, ProviderError> {
    Ok(match id {
        ProviderId::HuggingFace => Arc::new(HuggingFaceProvider::from_env()?),
        ProviderId::Cohere => Arc::new(CohereProvider::from_env()?),
        ProviderId::Ollama => Arc::new(OllamaProvider::from_env()?),
    })
}
