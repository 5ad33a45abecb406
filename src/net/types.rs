#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use crate::state::chat::ChatMessage;

/// `GET /api/health` response body.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HealthResponse {
    /// A reachable backend is not enough; the body must also report
    /// `status: "healthy"`.
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// `POST /api/chat` response body.
///
/// Older backend builds return the reply under `message` instead of
/// `ai_response`, so both are modeled and [`Self::text`] picks the first
/// non-empty one.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub ai_response: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl ChatResponse {
    /// The assistant reply text: `ai_response`, falling back to `message`.
    /// Blank strings count as absent.
    pub fn text(&self) -> Option<&str> {
        [self.ai_response.as_deref(), self.message.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|t| !t.is_empty())
    }
}

/// `GET /api/conversations/{id}` response body.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ConversationDetail {
    pub conversation_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    pub messages: Vec<ChatMessage>,
}

/// One entry in the history list. Summaries carry no message bodies.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ConversationSummary {
    pub id: String,
    pub title: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    pub message_count: u32,
}

/// `GET /api/users/{id}/conversations` response wrapper.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct UserConversations {
    pub conversations: Vec<ConversationSummary>,
}

/// `POST /api/conversations` response body.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct CreatedConversation {
    pub conversation_id: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// `POST /api/users` request payload.
#[derive(Clone, Debug, serde::Serialize)]
pub struct NewUser {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// `POST /api/users` response body.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct CreatedUser {
    pub user_id: String,
}

/// Error body shape shared by every non-2xx backend response.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
