use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use tinychat_api::{ApiError, ChatTransport, HealthStatus};
use tinychat_chat::PresentationSink;
use tinychat_models::{ChatRequest, ChatResponse};
use tinychat_types::Role;

/// Build a minimal server reply.
pub fn reply(text: &str, conversation_id: &str) -> ChatResponse {
    ChatResponse {
        response: text.to_string(),
        conversation_id: conversation_id.to_string(),
        timestamp: None,
        performance: None,
    }
}

/// Transport double that pops scripted replies and records every request
/// it was asked to send.
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<ChatResponse, ApiError>>>,
    requests: Mutex<Vec<ChatRequest>>,
    health: HealthStatus,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            health: HealthStatus::Available,
        }
    }

    pub fn with_health(health: HealthStatus) -> Self {
        Self {
            health,
            ..Self::new()
        }
    }

    pub fn reply_with(self, response: ChatResponse) -> Self {
        self.replies.lock().unwrap().push_back(Ok(response));
        self
    }

    pub fn fail_with(self, error: ApiError) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn request(&self, index: usize) -> ChatRequest {
        self.requests.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl ChatTransport for ScriptedTransport {
    async fn send(&self, _endpoint: &str, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("transport script exhausted")
    }

    async fn check_health(&self, _endpoint: &str) -> HealthStatus {
        self.health
    }
}

/// Everything the controller asked the presentation layer to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Message(Role, String),
    TypingShown,
    TypingRemoved,
    Connection(bool),
    SendingDisabled(bool),
    InputCleared,
    InputFocused,
}

/// Sink double that records the controller's calls for later assertions.
pub struct RecordingSink {
    events: Mutex<Vec<SinkEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: SinkEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl PresentationSink for RecordingSink {
    fn render_message(&self, role: Role, content: &str) {
        self.record(SinkEvent::Message(role, content.to_string()));
    }

    fn show_typing_placeholder(&self) {
        self.record(SinkEvent::TypingShown);
    }

    fn remove_typing_placeholder(&self) {
        self.record(SinkEvent::TypingRemoved);
    }

    fn set_connection_indicator(&self, connected: bool) {
        self.record(SinkEvent::Connection(connected));
    }

    fn set_sending_affordance(&self, disabled: bool) {
        self.record(SinkEvent::SendingDisabled(disabled));
    }

    fn clear_input(&self) {
        self.record(SinkEvent::InputCleared);
    }

    fn focus_input(&self) {
        self.record(SinkEvent::InputFocused);
    }
}
