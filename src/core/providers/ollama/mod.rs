//! Local Ollama server provider

mod client;
mod config;
mod provider;

pub use client::OllamaClient;
pub use config::{OllamaConfig, DEFAULT_MODEL};
pub use provider::{OllamaProvider, CONFIDENCE};
