//! Core traits
//!
//! The seams between the orchestrator and its provider implementations.

pub mod provider;

pub use provider::GenerationProvider;
