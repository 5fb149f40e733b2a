use serde::{Deserialize, Serialize};

/// Chat API request structure
///
/// `conversation_id` is omitted from the payload entirely until the server
/// has issued one; the server treats its absence as the start of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub conversation_id: Option<String>,
    pub max_length: u32,
    pub temperature: f32,
}
