//! Core types and structures for tinychat
//!
//! This crate provides the foundational types used across all tinychat crates.

use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Chat endpoint used when nothing else is configured
pub const DEFAULT_API_ENDPOINT: &str = "http://localhost:8000/chat";

/// Reply length budget (tokens) used when the configured value is unusable
pub const DEFAULT_MAX_LENGTH: u32 = 150;

/// Bounds the server accepts for the reply length budget
pub const MAX_LENGTH_MIN: u32 = 50;
pub const MAX_LENGTH_MAX: u32 = 500;

/// Sampling temperature used when the configured value is unusable
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Bounds the server accepts for the sampling temperature
pub const TEMPERATURE_MIN: f32 = 0.1;
pub const TEMPERATURE_MAX: f32 = 1.0;

// ============================================================================
// Transcript Types
// ============================================================================

/// Who authored a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single display entry in the conversation transcript.
///
/// Entries are appended in completion order and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatEntry {
    pub role: Role,
    pub content: String,
}

impl ChatEntry {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}
