//! Common test utilities
//!
//! Scripted provider doubles and request factories shared by the
//! integration tests.

pub mod providers;

pub use providers::ScriptedProvider;

use pathlight::{GenerationRequest, ProviderPreference};

/// The college-guidance scenario request from the orchestrator contract
pub fn college_request() -> GenerationRequest {
    GenerationRequest::new("How do I get into a good college?")
        .with_preferred(ProviderPreference::Auto)
        .with_max_tokens(500)
}
