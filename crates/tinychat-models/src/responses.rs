use serde::Deserialize;

/// Chat API response structure
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub conversation_id: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub performance: Option<Performance>,
}

/// Generation timing the server reports alongside each reply
#[derive(Debug, Clone, Deserialize)]
pub struct Performance {
    #[serde(default)]
    pub time_seconds: Option<f64>,
    #[serde(default)]
    pub memory_usage: Option<f64>,
}

/// Error body the server attaches to non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Health endpoint response
///
/// Every field is optional; the health verdict is decided by the HTTP
/// status, the body is only read for display.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub model_loaded: Option<bool>,
    #[serde(default)]
    pub device: Option<String>,
    #[serde(default)]
    pub conversations: Option<usize>,
}
