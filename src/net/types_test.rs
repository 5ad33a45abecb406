use super::*;
use crate::state::chat::Role;

// =============================================================
// ChatResponse reply text
// =============================================================

#[test]
fn reply_text_prefers_ai_response() {
    let resp = ChatResponse {
        ai_response: Some("primary".to_owned()),
        message: Some("fallback".to_owned()),
        ..ChatResponse::default()
    };
    assert_eq!(resp.text(), Some("primary"));
}

#[test]
fn reply_text_falls_back_to_message() {
    let resp = ChatResponse {
        message: Some("fallback".to_owned()),
        ..ChatResponse::default()
    };
    assert_eq!(resp.text(), Some("fallback"));
}

#[test]
fn reply_text_skips_blank_fields() {
    let resp = ChatResponse {
        ai_response: Some("   ".to_owned()),
        message: Some("real".to_owned()),
        ..ChatResponse::default()
    };
    assert_eq!(resp.text(), Some("real"));

    let empty = ChatResponse::default();
    assert_eq!(empty.text(), None);
}

// =============================================================
// Wire deserialization
// =============================================================

#[test]
fn chat_message_accepts_created_at_alias() {
    let raw = serde_json::json!({
        "id": "m1",
        "role": "assistant",
        "content": "hello",
        "created_at": "2025-06-01T10:00:00"
    });
    let msg: ChatMessage = serde_json::from_value(raw).expect("message");
    assert_eq!(msg.role, Role::Assistant);
    assert_eq!(msg.timestamp, "2025-06-01T10:00:00");
}

#[test]
fn conversation_detail_parses_backend_shape() {
    let raw = serde_json::json!({
        "conversation_id": "c1",
        "title": "Order help",
        "created_at": "2025-06-01T10:00:00",
        "messages": [
            {"id": "m1", "role": "user", "content": "hi", "created_at": "2025-06-01T10:00:01"},
            {"id": "m2", "role": "assistant", "content": "hello", "created_at": "2025-06-01T10:00:02"}
        ]
    });
    let detail: ConversationDetail = serde_json::from_value(raw).expect("detail");
    assert_eq!(detail.conversation_id, "c1");
    assert_eq!(detail.messages.len(), 2);
    assert_eq!(detail.messages[0].role, Role::User);
}

#[test]
fn summary_updated_at_is_optional() {
    let raw = serde_json::json!({
        "id": "c1",
        "title": "First",
        "created_at": "2025-06-01T10:00:00",
        "message_count": 3
    });
    let summary: ConversationSummary = serde_json::from_value(raw).expect("summary");
    assert_eq!(summary.updated_at, None);
    assert_eq!(summary.message_count, 3);
}

#[test]
fn user_conversations_unwraps_list() {
    let raw = serde_json::json!({
        "user_id": "u1",
        "conversations": [
            {"id": "c1", "title": "First", "created_at": "2025-06-01T10:00:00",
             "updated_at": "2025-06-02T10:00:00", "message_count": 3}
        ]
    });
    let wrapper: UserConversations = serde_json::from_value(raw).expect("wrapper");
    assert_eq!(wrapper.conversations.len(), 1);
    assert_eq!(wrapper.conversations[0].updated_at.as_deref(), Some("2025-06-02T10:00:00"));
}

// =============================================================
// Health body
// =============================================================

#[test]
fn health_requires_healthy_status() {
    let healthy: HealthResponse =
        serde_json::from_value(serde_json::json!({"status": "healthy", "database": "connected"}))
            .expect("health");
    assert!(healthy.is_healthy());

    let degraded: HealthResponse =
        serde_json::from_value(serde_json::json!({"status": "degraded"})).expect("health");
    assert!(!degraded.is_healthy());
}
