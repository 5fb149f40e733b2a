use tinychat_types::DEFAULT_API_ENDPOINT;

/// Conversation identity and request lifecycle flags for one session.
///
/// Created once at startup and owned by the controller; destroyed with the
/// process. Nothing is persisted across runs.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Server-issued conversation token; `None` until the first reply.
    /// Once set, every subsequent request carries it unchanged.
    pub conversation_id: Option<String>,
    /// True strictly between send-initiation and its terminal outcome.
    pub is_generating: bool,
    /// Chat endpoint, used verbatim for sends and health probes.
    pub api_endpoint: String,
}

/// Partial update merged into [`SessionState`].
///
/// Absent fields keep their current value; present fields overwrite,
/// last write wins. The empty patch is `StatePatch::default()`.
#[derive(Debug, Default)]
pub struct StatePatch {
    pub conversation_id: Option<String>,
    pub is_generating: Option<bool>,
    pub api_endpoint: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            conversation_id: None,
            is_generating: false,
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
        }
    }

    /// Shallow merge. Never fails; callers re-sync any state-dependent
    /// affordances afterwards.
    pub fn apply(&mut self, patch: StatePatch) {
        if let Some(conversation_id) = patch.conversation_id {
            self.conversation_id = Some(conversation_id);
        }
        if let Some(is_generating) = patch.is_generating {
            self.is_generating = is_generating;
        }
        if let Some(api_endpoint) = patch.api_endpoint {
            self.api_endpoint = api_endpoint;
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
