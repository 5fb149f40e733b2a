use async_trait::async_trait;

use crate::client::{ChatTransport, HealthStatus};
use crate::error::ApiError;
use tinychat_models::{ChatRequest, ChatResponse, ErrorBody};

/// Derive the health probe URL by swapping the `/chat` path for `/health`.
///
/// Only the first occurrence is replaced; an endpoint without a `/chat`
/// segment is probed as-is.
pub fn health_url(endpoint: &str) -> String {
    endpoint.replacen("/chat", "/health", 1)
}

/// HTTP client for the local chat server
pub struct HttpChatClient {
    client: reqwest::Client,
}

impl HttpChatClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatTransport for HttpChatClient {
    async fn send(&self, endpoint: &str, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        let response = self
            .client
            .post(endpoint)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Prefer the server's detail message; fall back to the status code
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .map(|body| body.detail);
            return Err(ApiError::Request(detail.unwrap_or_else(|| {
                format!("request failed: {}", status.as_u16())
            })));
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|_| ApiError::Request("malformed response body".to_string()))
    }

    async fn check_health(&self, endpoint: &str) -> HealthStatus {
        let result = self
            .client
            .get(health_url(endpoint))
            .header("Accept", "application/json")
            .send()
            .await;

        // A 2xx status is enough; the body is not consulted
        match result {
            Ok(response) if response.status().is_success() => HealthStatus::Available,
            _ => HealthStatus::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_url_swaps_chat_for_health() {
        assert_eq!(
            health_url("http://localhost:8000/chat"),
            "http://localhost:8000/health"
        );
    }

    #[test]
    fn health_url_replaces_first_occurrence_only() {
        assert_eq!(
            health_url("http://chat.example.com/chat"),
            "http://health.example.com/chat"
        );
    }

    #[test]
    fn health_url_leaves_other_paths_untouched() {
        assert_eq!(
            health_url("http://localhost:8000/v1/complete"),
            "http://localhost:8000/v1/complete"
        );
    }
}
