//! Provider implementations
//!
//! One module per external provider, each with its own configuration,
//! HTTP client, and trait implementation, plus the registry that holds
//! whichever providers resolved from the environment.

pub mod cohere;
pub mod huggingface;
pub mod ollama;
pub mod registry;

pub use registry::ProviderRegistry;
