//! Hugging Face Inference API provider

mod client;
mod config;
mod provider;

pub use client::HuggingFaceClient;
pub use config::{HuggingFaceConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use provider::{HuggingFaceProvider, CONFIDENCE};
