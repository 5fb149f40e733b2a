//! Conversation session and send lifecycle for tinychat
//!
//! This crate holds the client's core: the session state (conversation
//! identity, in-flight guard, endpoint), the generation settings, and the
//! controller that turns one user message into one request/response cycle
//! rendered through an injected [`PresentationSink`].

pub mod controller;
pub mod session;
pub mod settings;

pub use controller::{ChatController, PresentationSink, SendOutcome};
pub use session::{SessionState, StatePatch};
pub use settings::GenerationSettings;
