use async_trait::async_trait;

use crate::error::ApiError;
use tinychat_models::{ChatRequest, ChatResponse};

pub mod http;

pub use http::{health_url, HttpChatClient};

/// Verdict of a health probe against the configured endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Available,
    Unavailable,
}

impl HealthStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, HealthStatus::Available)
    }
}

/// Chat transport trait - the two operations the conversation layer needs
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// POST a chat turn to the given endpoint and parse the reply.
    async fn send(&self, endpoint: &str, request: &ChatRequest) -> Result<ChatResponse, ApiError>;

    /// Probe the health endpoint derived from the chat endpoint.
    ///
    /// Never fails: any problem, network or HTTP, is reported as
    /// `Unavailable`. Also called outside the send flow, e.g. after the
    /// endpoint is reconfigured.
    async fn check_health(&self, endpoint: &str) -> HealthStatus;
}
