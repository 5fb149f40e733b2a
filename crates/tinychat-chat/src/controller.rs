use std::sync::Arc;

use tinychat_api::{ApiError, ChatTransport, HealthStatus};
use tinychat_models::{ChatRequest, ChatResponse};
use tinychat_types::{ChatEntry, Role};

use crate::session::{SessionState, StatePatch};
use crate::settings::GenerationSettings;

/// Rendering surface the controller drives.
///
/// Implemented by the terminal frontend and by test doubles; the
/// controller never touches a concrete display.
pub trait PresentationSink: Send + Sync {
    /// Append a finished message to the display.
    fn render_message(&self, role: Role, content: &str);
    /// Show the transient pending-reply placeholder.
    fn show_typing_placeholder(&self);
    /// Remove the placeholder, if visible.
    fn remove_typing_placeholder(&self);
    /// Reflect whether the server is reachable.
    fn set_connection_indicator(&self, connected: bool);
    /// Disable or re-enable the send affordance.
    fn set_sending_affordance(&self, disabled: bool);
    /// Clear the message entry control.
    fn clear_input(&self);
    /// Return focus to the message entry control.
    fn focus_input(&self);
}

/// Result of a [`ChatController::send_message`] call, after all rendering
/// is done. Errors never escape the controller; this is the only signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Input was empty or a send was already in flight; nothing happened.
    Ignored,
    /// The server replied and the assistant message was rendered.
    Replied,
    /// The send failed; the error was rendered as an assistant message.
    Failed,
}

/// Orchestrates one send cycle: validates input, guards against concurrent
/// submission, invokes the transport, and maps the outcome to sink calls.
pub struct ChatController {
    transport: Arc<dyn ChatTransport>,
    sink: Arc<dyn PresentationSink>,
    state: SessionState,
    settings: GenerationSettings,
    transcript: Vec<ChatEntry>,
}

impl ChatController {
    pub fn new(transport: Arc<dyn ChatTransport>, sink: Arc<dyn PresentationSink>) -> Self {
        Self {
            transport,
            sink,
            state: SessionState::new(),
            settings: GenerationSettings::default(),
            transcript: Vec::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut GenerationSettings {
        &mut self.settings
    }

    /// The display sequence so far, in completion order.
    pub fn transcript(&self) -> &[ChatEntry] {
        &self.transcript
    }

    /// Merge a partial update into the session state and re-sync the
    /// affordances that depend on it.
    pub fn apply_patch(&mut self, patch: StatePatch) {
        self.state.apply(patch);
        self.sink.set_sending_affordance(self.state.is_generating);
    }

    /// Point the session at a different chat endpoint. Callers usually
    /// follow up with [`Self::check_health`].
    pub fn set_endpoint(&mut self, url: &str) {
        self.apply_patch(StatePatch {
            api_endpoint: Some(url.trim().to_string()),
            ..Default::default()
        });
    }

    /// Send one user message through a full request/response cycle.
    ///
    /// Empty input and sends issued while a cycle is already in flight are
    /// dropped without signalling an error. Between the `is_generating`
    /// acquisition and the trailing release there is no early return, so
    /// the cleanup runs on every path out of the cycle.
    pub async fn send_message(&mut self, input: &str) -> SendOutcome {
        let text = input.trim();
        if text.is_empty() || self.state.is_generating {
            return SendOutcome::Ignored;
        }

        self.push_entry(Role::User, text);
        self.sink.clear_input();
        self.sink.show_typing_placeholder();
        self.apply_patch(StatePatch {
            is_generating: Some(true),
            ..Default::default()
        });

        let result = self.dispatch(text).await;
        self.sink.remove_typing_placeholder();

        let outcome = match result {
            Ok(reply) => {
                self.push_entry(Role::Assistant, &reply.response);
                // The server is authoritative for the conversation id,
                // even when it differs from the one we sent
                self.apply_patch(StatePatch {
                    conversation_id: Some(reply.conversation_id),
                    ..Default::default()
                });
                self.sink.set_connection_indicator(true);
                SendOutcome::Replied
            }
            Err(err) => {
                self.push_entry(Role::Assistant, &format!("Error: {}", err));
                self.sink.set_connection_indicator(false);
                SendOutcome::Failed
            }
        };

        self.apply_patch(StatePatch {
            is_generating: Some(false),
            ..Default::default()
        });
        self.sink.focus_input();
        outcome
    }

    /// Probe the server and sync the connection indicator.
    pub async fn check_health(&self) -> HealthStatus {
        let status = self.transport.check_health(&self.state.api_endpoint).await;
        self.sink.set_connection_indicator(status.is_available());
        status
    }

    async fn dispatch(&self, text: &str) -> Result<ChatResponse, ApiError> {
        let request = ChatRequest {
            message: text.to_string(),
            conversation_id: self.state.conversation_id.clone(),
            max_length: self.settings.max_length,
            temperature: self.settings.temperature,
        };
        self.transport.send(&self.state.api_endpoint, &request).await
    }

    fn push_entry(&mut self, role: Role, content: &str) {
        self.sink.render_message(role, content);
        self.transcript.push(ChatEntry::new(role, content));
    }
}
