//! REST API client for the chat backend.
//!
//! Browser builds (`csr`) make real HTTP calls via `gloo-net`; everywhere
//! else every operation resolves to [`ApiError::Network`] so the crate
//! compiles and tests natively.
//!
//! ERROR HANDLING
//! ==============
//! Each operation either resolves with a parsed JSON body or fails with an
//! [`ApiError`] identifying the endpoint and status/cause. No retries, no
//! timeouts, no backoff: the caller decides whether to surface or
//! re-attempt a failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::{
    ChatResponse, ConversationDetail, ConversationSummary, CreatedConversation, CreatedUser,
    HealthResponse, NewUser,
};
use crate::state::chat::Role;

/// Base URL of the chat backend, fixed at compile time via `CHAT_API_URL`.
pub fn base_url() -> &'static str {
    option_env!("CHAT_API_URL").unwrap_or("http://localhost:5000")
}

/// Failure raised by any API operation, classified for the view layer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never reached the server.
    #[error("request to {endpoint} failed: {cause}")]
    Network { endpoint: String, cause: String },
    /// The resource does not exist (HTTP 404).
    #[error("{endpoint} returned 404: {message}")]
    NotFound { endpoint: String, message: String },
    /// The server rejected the request (other 4xx).
    #[error("{endpoint} returned client error {status}: {message}")]
    Client {
        endpoint: String,
        status: u16,
        message: String,
    },
    /// The server failed processing the request (5xx).
    #[error("{endpoint} returned server error {status}: {message}")]
    Server {
        endpoint: String,
        status: u16,
        message: String,
    },
    /// Anything else: unparseable body, unexpected status class.
    #[error("unexpected response from {endpoint}: {cause}")]
    Unexpected { endpoint: String, cause: String },
}

impl ApiError {
    /// Classify a non-2xx status plus any server-provided error text.
    pub fn from_status(endpoint: &str, status: u16, body_error: Option<String>) -> Self {
        let message = body_error.unwrap_or_else(|| format!("HTTP {status}"));
        let endpoint = endpoint.to_owned();
        match status {
            404 => Self::NotFound { endpoint, message },
            400..=499 => Self::Client {
                endpoint,
                status,
                message,
            },
            500..=599 => Self::Server {
                endpoint,
                status,
                message,
            },
            _ => Self::Unexpected {
                endpoint,
                cause: format!("status {status}: {message}"),
            },
        }
    }

    /// True for failures where the request never reached the server; these
    /// also downgrade the connectivity indicator.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// The assistant-role message inserted into the conversation when this
    /// failure surfaces to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network { .. } => {
                "Unable to reach the server. Please check your connection and try again."
            }
            Self::Server { .. } => "Sorry, I encountered an error. Please try again.",
            Self::NotFound { .. } => "Sorry, that conversation could not be found.",
            Self::Client { .. } => "Sorry, I couldn't process that request. Please try again.",
            Self::Unexpected { .. } => "Sorry, something unexpected went wrong. Please try again.",
        }
        .to_owned()
    }

    /// Stub error for operations invoked outside a browser build.
    #[cfg(not(feature = "csr"))]
    fn offline(endpoint: &str) -> Self {
        Self::Network {
            endpoint: endpoint.to_owned(),
            cause: "not available outside the browser".to_owned(),
        }
    }
}

/// Fold a non-2xx response into an [`ApiError`], reading the backend's
/// `{"error": ...}` body when present.
#[cfg(feature = "csr")]
async fn status_error(endpoint: &str, resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body_error = resp
        .json::<crate::net::types::ErrorBody>()
        .await
        .ok()
        .and_then(|b| b.error);
    ApiError::from_status(endpoint, status, body_error)
}

#[cfg(feature = "csr")]
async fn get_json<T: serde::de::DeserializeOwned>(endpoint: &str) -> Result<T, ApiError> {
    let url = format!("{}{endpoint}", base_url());
    let resp = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network {
            endpoint: endpoint.to_owned(),
            cause: e.to_string(),
        })?;
    if !resp.ok() {
        return Err(status_error(endpoint, resp).await);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Unexpected {
        endpoint: endpoint.to_owned(),
        cause: e.to_string(),
    })
}

#[cfg(feature = "csr")]
async fn post_json<T: serde::de::DeserializeOwned>(
    endpoint: &str,
    payload: &serde_json::Value,
) -> Result<T, ApiError> {
    let url = format!("{}{endpoint}", base_url());
    let resp = gloo_net::http::Request::post(&url)
        .json(payload)
        .map_err(|e| ApiError::Unexpected {
            endpoint: endpoint.to_owned(),
            cause: e.to_string(),
        })?
        .send()
        .await
        .map_err(|e| ApiError::Network {
            endpoint: endpoint.to_owned(),
            cause: e.to_string(),
        })?;
    if !resp.ok() {
        return Err(status_error(endpoint, resp).await);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Unexpected {
        endpoint: endpoint.to_owned(),
        cause: e.to_string(),
    })
}

/// `GET /api/health` — success means the backend is reachable.
pub async fn health_check() -> Result<HealthResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json("/api/health").await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::offline("/api/health"))
    }
}

/// `POST /api/chat` — submit one user message. For a fresh conversation
/// pass no `conversation_id`; the response then carries the id the backend
/// assigned.
pub async fn send_message(
    message: &str,
    conversation_id: Option<&str>,
    user_id: Option<&str>,
) -> Result<ChatResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let mut payload = serde_json::json!({ "message": message });
        if let Some(id) = conversation_id {
            payload["conversation_id"] = id.into();
        }
        if let Some(id) = user_id {
            payload["user_id"] = id.into();
        }
        post_json("/api/chat", &payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (message, conversation_id, user_id);
        Err(ApiError::offline("/api/chat"))
    }
}

/// `GET /api/conversations/{id}` — fetch a conversation with all messages.
pub async fn get_conversation(conversation_id: &str) -> Result<ConversationDetail, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(&format!("/api/conversations/{conversation_id}")).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::offline(&format!(
            "/api/conversations/{conversation_id}"
        )))
    }
}

/// `POST /api/conversations` — create an empty conversation for a user.
pub async fn create_conversation(
    user_id: &str,
    title: Option<&str>,
) -> Result<CreatedConversation, ApiError> {
    #[cfg(feature = "csr")]
    {
        let mut payload = serde_json::json!({ "user_id": user_id });
        if let Some(title) = title {
            payload["title"] = title.into();
        }
        post_json("/api/conversations", &payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (user_id, title);
        Err(ApiError::offline("/api/conversations"))
    }
}

/// `POST /api/conversations/{id}/messages` — append a message directly to a
/// persisted conversation.
pub async fn add_message(
    conversation_id: &str,
    role: Role,
    content: &str,
) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "role": role.as_str(), "content": content });
        post_json(&format!("/api/conversations/{conversation_id}/messages"), &payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (role, content);
        Err(ApiError::offline(&format!(
            "/api/conversations/{conversation_id}/messages"
        )))
    }
}

/// `GET /api/users/{id}/conversations` — summaries for the history panel.
pub async fn get_user_conversations(user_id: &str) -> Result<Vec<ConversationSummary>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let wrapper: crate::net::types::UserConversations =
            get_json(&format!("/api/users/{user_id}/conversations")).await?;
        Ok(wrapper.conversations)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::offline(&format!("/api/users/{user_id}/conversations")))
    }
}

/// `POST /api/users` — register a user and obtain its id.
pub async fn create_user(user: &NewUser) -> Result<CreatedUser, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::to_value(user).map_err(|e| ApiError::Unexpected {
            endpoint: "/api/users".to_owned(),
            cause: e.to_string(),
        })?;
        post_json("/api/users", &payload).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = user;
        Err(ApiError::offline("/api/users"))
    }
}

/// `GET /api/stats` — backend counters, shape left to the backend.
pub async fn get_stats() -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json("/api/stats").await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::offline("/api/stats"))
    }
}
