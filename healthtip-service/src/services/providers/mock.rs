//! Mock completion provider for testing and credential-less dev runs.

use super::{CompletionProvider, GenerationParams, ProviderError};
use crate::prompts::PromptPayload;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

/// Mock provider with a scripted reply, a failure toggle, and a call counter.
pub struct MockCompletionProvider {
    reply: Mutex<String>,
    failing: AtomicBool,
    call_count: AtomicU64,
    last_payload: Mutex<Option<PromptPayload>>,
}

impl MockCompletionProvider {
    pub fn new() -> Self {
        Self::with_reply("Mock health tip reply")
    }

    pub fn with_reply(reply: &str) -> Self {
        Self {
            reply: Mutex::new(reply.to_string()),
            failing: AtomicBool::new(false),
            call_count: AtomicU64::new(0),
            last_payload: Mutex::new(None),
        }
    }

    pub fn set_reply(&self, reply: &str) {
        *self.reply.lock().expect("mock reply lock poisoned") = reply.to_string();
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of completion calls received so far.
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }

    /// The payload from the most recent completion call, if any.
    pub fn last_payload(&self) -> Option<PromptPayload> {
        self.last_payload
            .lock()
            .expect("mock payload lock poisoned")
            .clone()
    }
}

impl Default for MockCompletionProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(
        &self,
        payload: &PromptPayload,
        _params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        *self
            .last_payload
            .lock()
            .expect("mock payload lock poisoned") = Some(payload.clone());

        if self.failing.load(Ordering::SeqCst) {
            return Err(ProviderError::ApiError(
                "Mock provider configured to fail".to_string(),
            ));
        }

        tracing::info!(
            call_count = self.call_count.load(Ordering::SeqCst),
            "[MOCK] completion served"
        );

        Ok(self.reply.lock().expect("mock reply lock poisoned").clone())
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}
