//! Persisted session identity for the history list.
//!
//! The backend keys conversation history by user id, but the client has no
//! login flow. A guest user is created on first use and its id persisted in
//! `localStorage`, so history survives reloads. Requires a browser
//! environment; elsewhere no identity can be established.

use crate::net::api;
use crate::net::types::NewUser;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "chat_client_user_id";

/// Read the persisted user id, if any.
pub fn stored_user_id() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        window.local_storage().ok().flatten()?.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist the user id for later sessions.
pub fn store_user_id(user_id: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, user_id);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = user_id;
    }
}

/// The session's user id, registering a guest user with the backend on
/// first use. `None` when registration fails; callers degrade to an empty
/// history list.
pub async fn ensure_user_id() -> Option<String> {
    if let Some(id) = stored_user_id() {
        return Some(id);
    }
    let guest = NewUser {
        email: format!("guest-{}@chat.local", uuid::Uuid::new_v4()),
        name: Some("Guest".to_owned()),
    };
    match api::create_user(&guest).await {
        Ok(created) => {
            store_user_id(&created.user_id);
            Some(created.user_id)
        }
        Err(err) => {
            leptos::logging::warn!("guest registration failed: {err}");
            None
        }
    }
}
