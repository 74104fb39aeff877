//! Scripted provider doubles
//!
//! In-memory `GenerationProvider` implementations with a fixed behavior
//! per instance. Every received request is recorded so tests can assert
//! that parameters survive unchanged across candidate attempts.

use std::sync::Mutex;

use async_trait::async_trait;
use pathlight::{
    Completion, GenerationProvider, GenerationRequest, ProviderError, ProviderId, RequestContext,
};

/// What a scripted provider does on every call
#[derive(Debug)]
enum Behavior {
    Succeed(String),
    SucceedEmpty,
    Fail(ProviderError),
}

/// A provider double with a fixed scripted behavior
#[derive(Debug)]
pub struct ScriptedProvider {
    id: ProviderId,
    confidence: f32,
    behavior: Behavior,
    seen: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedProvider {
    /// Always answers with the given text
    pub fn succeeding(id: ProviderId, text: impl Into<String>) -> Self {
        Self::new(id, Behavior::Succeed(text.into()))
    }

    /// Always answers, but with whitespace-only content
    pub fn empty(id: ProviderId) -> Self {
        Self::new(id, Behavior::SucceedEmpty)
    }

    /// Always fails with a network error
    pub fn failing(id: ProviderId) -> Self {
        Self::new(
            id,
            Behavior::Fail(ProviderError::network(id.as_str(), "scripted failure")),
        )
    }

    /// Override the static confidence constant
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }

    /// Requests this provider has received, in order
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.seen.lock().unwrap().clone()
    }

    /// Number of calls this provider has received
    pub fn call_count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    fn new(id: ProviderId, behavior: Behavior) -> Self {
        Self {
            id,
            confidence: 0.9,
            behavior,
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl GenerationProvider for ScriptedProvider {
    fn id(&self) -> ProviderId {
        self.id
    }

    fn confidence(&self) -> f32 {
        self.confidence
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
        _context: &RequestContext,
    ) -> Result<Completion, ProviderError> {
        self.seen.lock().unwrap().push(request.clone());

        match &self.behavior {
            Behavior::Succeed(text) => Ok(Completion::new(text.clone())),
            Behavior::SucceedEmpty => Ok(Completion::new("   \n")),
            Behavior::Fail(error) => Err(error.clone()),
        }
    }
}
