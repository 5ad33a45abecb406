#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::api::ApiError;
use crate::net::types::{ChatResponse, ConversationSummary};
use crate::util::time;

/// Reserved id of the synthetic greeting message. The greeting is seeded on
/// every reset and is never sent to the backend.
pub const GREETING_ID: &str = "welcome";

const GREETING_CONTENT: &str = "Hello! I'm your AI assistant. I can help you with:\n\n\
    \u{2022} Product information and top sellers\n\
    \u{2022} Order status tracking\n\
    \u{2022} Inventory and stock levels\n\
    \u{2022} General e-commerce questions\n\n\
    How can I help you today?";

/// Message author role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single chat message. Immutable once appended; ordering within a
/// conversation is insertion order.
///
/// The backend's conversation payload names the timestamp field
/// `created_at`, so deserialization accepts both spellings.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(alias = "created_at")]
    pub timestamp: String,
}

impl ChatMessage {
    /// A user-authored message with a fresh client-assigned id.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::User,
            content: content.into(),
            timestamp: time::now_iso(),
        }
    }

    /// An assistant message with a fresh client-assigned id.
    pub fn assistant(content: impl Into<String>, timestamp: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::Assistant,
            content: content.into(),
            timestamp,
        }
    }

    fn greeting() -> Self {
        Self {
            id: GREETING_ID.to_owned(),
            role: Role::Assistant,
            content: GREETING_CONTENT.to_owned(),
            timestamp: time::now_iso(),
        }
    }
}

/// Ticket returned by [`ChatState::begin_send`]. Carries the trimmed draft
/// to submit and the epoch the request was issued under, so a response that
/// arrives after a reset or conversation switch can be discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SendTicket {
    pub text: String,
    pub epoch: u64,
}

/// Root chat state: the ordered message log, the in-flight flag, the input
/// draft, the active conversation identity, and the history-panel cache.
///
/// Held in an `RwSignal` provided via context; components never mutate
/// fields directly during a turn, they call the transition methods below.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
    pub user_input: String,
    pub conversation_id: Option<String>,
    pub conversations: Vec<ConversationSummary>,
    pub show_history_panel: bool,
    /// Bumped on reset and conversation load; in-flight responses carrying
    /// an older epoch are ignored.
    pub epoch: u64,
}

impl ChatState {
    /// Session-start state: initial defaults plus the seeded greeting.
    pub fn new() -> Self {
        let mut state = Self::default();
        state.reset();
        state
    }

    // ---- plain store operations -------------------------------------

    /// Replace the entire message sequence. Used after loading a
    /// conversation; an empty list is allowed.
    pub fn set_messages(&mut self, messages: Vec<ChatMessage>) {
        self.messages = messages;
    }

    /// Append one message. Existing entries are never reordered or removed
    /// while a conversation is active.
    pub fn add_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_user_input(&mut self, input: impl Into<String>) {
        self.user_input = input.into();
    }

    pub fn set_conversation_id(&mut self, id: Option<String>) {
        self.conversation_id = id;
    }

    pub fn set_conversations(&mut self, conversations: Vec<ConversationSummary>) {
        self.conversations = conversations;
    }

    pub fn set_history_panel(&mut self, show: bool) {
        self.show_history_panel = show;
    }

    /// Restore initial state and re-seed the greeting with a fresh
    /// timestamp. Bumps the epoch so in-flight responses are discarded.
    pub fn reset(&mut self) {
        *self = Self {
            messages: vec![ChatMessage::greeting()],
            epoch: self.epoch + 1,
            ..Self::default()
        };
    }

    // ---- turn transitions -------------------------------------------

    /// Start a send turn from the current draft.
    ///
    /// Returns `None` if the trimmed draft is empty or a send is already in
    /// flight. Otherwise appends the user message optimistically, clears
    /// the draft, raises `loading`, and returns the ticket to submit.
    pub fn begin_send(&mut self) -> Option<SendTicket> {
        if self.loading {
            return None;
        }
        let text = self.user_input.trim().to_owned();
        if text.is_empty() {
            return None;
        }
        self.add_message(ChatMessage::user(text.clone()));
        self.user_input.clear();
        self.loading = true;
        Some(SendTicket {
            text,
            epoch: self.epoch,
        })
    }

    /// Apply a successful send response.
    ///
    /// Appends the assistant reply and, if this conversation had no backend
    /// identity yet, adopts the server-issued id. An already-established id
    /// is never overwritten by later turns. A response issued under an
    /// older epoch is discarded entirely.
    pub fn finish_send_ok(&mut self, epoch: u64, reply: &ChatResponse) {
        if epoch != self.epoch {
            return;
        }
        let content = reply.text().unwrap_or_default().to_owned();
        let timestamp = reply.timestamp.clone().unwrap_or_else(time::now_iso);
        self.add_message(ChatMessage::assistant(content, timestamp));
        if self.conversation_id.is_none() {
            self.conversation_id = reply.conversation_id.clone();
        }
        self.loading = false;
    }

    /// Apply a failed send: append a synthetic assistant error message
    /// chosen by the error classification, then drop `loading`. Stale
    /// epochs are discarded like in [`Self::finish_send_ok`].
    pub fn finish_send_err(&mut self, epoch: u64, error: &ApiError) {
        if epoch != self.epoch {
            return;
        }
        self.add_message(ChatMessage::assistant(error.user_message(), time::now_iso()));
        self.loading = false;
    }

    /// Replace the message log with a loaded conversation, adopt its id,
    /// and close the history panel. Bumps the epoch so any in-flight send
    /// against the previous conversation is discarded.
    pub fn load_conversation(&mut self, id: impl Into<String>, messages: Vec<ChatMessage>) {
        self.set_messages(messages);
        self.conversation_id = Some(id.into());
        self.show_history_panel = false;
        self.loading = false;
        self.epoch += 1;
    }

    /// A conversation load failed: surface the error as an assistant
    /// message and leave everything else untouched.
    pub fn finish_load_err(&mut self, error: &ApiError) {
        self.add_message(ChatMessage::assistant(error.user_message(), time::now_iso()));
    }

    /// Start a fresh, unsent session: initial state, no backend identity,
    /// history panel closed. Synchronous, cannot fail.
    pub fn new_conversation(&mut self) {
        self.reset();
    }
}
