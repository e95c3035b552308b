//! OpenRouter provider implementation.
//!
//! Speaks both OpenAI-style call shapes: `/chat/completions` for chat
//! templates and `/completions` for completion templates. Only the first
//! choice's text field is read from either response.

use super::{CompletionProvider, GenerationParams, ProviderError};
use crate::prompts::PromptPayload;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// OpenRouter provider configuration.
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub api_key: String,
    pub base_url: String,
}

pub struct OpenRouterProvider {
    config: OpenRouterConfig,
    client: Client,
}

impl OpenRouterProvider {
    pub fn new(config: OpenRouterConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| {
                ProviderError::NotConfigured(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn post_json<Req: Serialize>(
        &self,
        path: &str,
        request: &Req,
    ) -> Result<reqwest::Response, ProviderError> {
        let response = self
            .client
            .post(self.api_url(path))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                return Err(ProviderError::RateLimited);
            }

            return Err(ProviderError::ApiError(format!(
                "OpenRouter API error {}: {}",
                status, error_text
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl CompletionProvider for OpenRouterProvider {
    async fn complete(
        &self,
        payload: &PromptPayload,
        params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        match payload {
            PromptPayload::Chat { system, user } => {
                let request = ChatCompletionRequest {
                    model: params.model.clone(),
                    messages: vec![
                        ChatMessage {
                            role: "system".to_string(),
                            content: system.clone(),
                        },
                        ChatMessage {
                            role: "user".to_string(),
                            content: user.clone(),
                        },
                    ],
                    max_tokens: params.max_tokens,
                    temperature: params.temperature,
                };

                tracing::debug!(
                    model = %params.model,
                    user_len = user.len(),
                    "Sending chat completion request to OpenRouter"
                );

                let response = self.post_json("chat/completions", &request).await?;

                let api_response: ChatCompletionResponse = response.json().await.map_err(|e| {
                    ProviderError::ShapeMismatch(format!("Failed to parse response: {}", e))
                })?;

                api_response
                    .choices
                    .into_iter()
                    .next()
                    .map(|c| c.message.content)
                    .ok_or_else(|| {
                        ProviderError::ShapeMismatch("Response contained no choices".to_string())
                    })
            }
            PromptPayload::Completion { prompt } => {
                let request = TextCompletionRequest {
                    model: params.model.clone(),
                    prompt: prompt.clone(),
                    max_tokens: params.max_tokens,
                    temperature: params.temperature,
                };

                tracing::debug!(
                    model = %params.model,
                    prompt_len = prompt.len(),
                    "Sending text completion request to OpenRouter"
                );

                let response = self.post_json("completions", &request).await?;

                let api_response: TextCompletionResponse = response.json().await.map_err(|e| {
                    ProviderError::ShapeMismatch(format!("Failed to parse response: {}", e))
                })?;

                api_response
                    .choices
                    .into_iter()
                    .next()
                    .map(|c| c.text)
                    .ok_or_else(|| {
                        ProviderError::ShapeMismatch("Response contained no choices".to_string())
                    })
            }
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.config.api_key.is_empty() {
            return Err(ProviderError::NotConfigured(
                "OpenRouter API key not configured".to_string(),
            ));
        }

        let response = self
            .client
            .get(self.api_url("models"))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ProviderError::ApiError(format!(
                "Health check failed: {}",
                response.status()
            )))
        }
    }
}

// ============================================================================
// OpenRouter API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct TextCompletionRequest {
    model: String,
    prompt: String,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct TextCompletionResponse {
    #[serde(default)]
    choices: Vec<TextChoice>,
}

#[derive(Debug, Deserialize)]
struct TextChoice {
    text: String,
}
