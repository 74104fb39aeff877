//! Generation orchestration
//!
//! The sequential try-chain across providers and the deterministic
//! keyword fallback it terminates in.

pub mod fallback;
#[allow(clippy::module_inception)]
pub mod orchestrator;

pub use fallback::FALLBACK_CONFIDENCE;
pub use orchestrator::Orchestrator;
