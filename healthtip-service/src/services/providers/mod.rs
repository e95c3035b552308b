//! Completion provider abstraction and implementations.
//!
//! A trait-based seam over the hosted language-model API so the relay can be
//! exercised against a mock in tests and run without a credential in dev.

pub mod mock;
pub mod openrouter;

use crate::prompts::PromptPayload;
use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Unexpected response shape: {0}")]
    ShapeMismatch(String),
}

/// Generation parameters sent with every request.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Trait for text-completion providers.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends one prompt and returns the first choice's text, unprocessed.
    async fn complete(
        &self,
        payload: &PromptPayload,
        params: &GenerationParams,
    ) -> Result<String, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
