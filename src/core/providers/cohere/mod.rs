//! Cohere generate API provider

mod client;
mod config;
mod provider;

pub use client::CohereClient;
pub use config::{CohereConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use provider::{CohereProvider, CONFIDENCE};
