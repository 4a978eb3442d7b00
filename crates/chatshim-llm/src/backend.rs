use std::sync::Arc;

use async_trait::async_trait;
use chatshim_core::chat::{ChatRequest, ChatResult};

use crate::error::Result;

/// A backend that can run a chat completion.
///
/// The adapter only ever calls `chat_completion` once per request and
/// returns whatever error it produces unchanged. Transport, retries and
/// timeouts are the implementation's business.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Get the backend ID, used in log fields
    fn backend_id(&self) -> &str;

    /// Send a chat request and get a complete result
    async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResult>;
}

#[async_trait]
impl<B: ChatBackend + ?Sized> ChatBackend for Arc<B> {
    fn backend_id(&self) -> &str {
        (**self).backend_id()
    }

    async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResult> {
        (**self).chat_completion(request).await
    }
}

#[async_trait]
impl<'a, B: ChatBackend + ?Sized> ChatBackend for &'a B {
    fn backend_id(&self) -> &str {
        (**self).backend_id()
    }

    async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResult> {
        (**self).chat_completion(request).await
    }
}
