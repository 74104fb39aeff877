//! Core functionality
//!
//! Types, the provider trait and implementations, the orchestrator, and
//! the structured-extraction task helpers.

pub mod orchestrator;
pub mod providers;
pub mod tasks;
pub mod traits;
pub mod types;
