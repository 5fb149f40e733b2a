//! # tinychat-api
//!
//! HTTP transport for the tinychat local model server.
//!
//! The conversation layer talks to the server through the [`ChatTransport`]
//! trait; [`HttpChatClient`] is the reqwest-backed implementation. The
//! transport has exactly two operations: posting a chat turn and probing
//! the server's health endpoint.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tinychat_api::{ChatTransport, HttpChatClient};
//! use tinychat_models::ChatRequest;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = HttpChatClient::new();
//!
//!     let request = ChatRequest {
//!         message: "Hello!".to_string(),
//!         conversation_id: None,
//!         max_length: 150,
//!         temperature: 0.7,
//!     };
//!
//!     match client.send("http://localhost:8000/chat", &request).await {
//!         Ok(reply) => println!("{}", reply.response),
//!         Err(err) => eprintln!("Error: {}", err),
//!     }
//! }
//! ```

pub mod client;
pub mod error;

// Re-export commonly used types
pub use client::{health_url, ChatTransport, HealthStatus, HttpChatClient};
pub use error::ApiError;
