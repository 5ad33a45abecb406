use super::*;

fn health(status: &str) -> HealthResponse {
    serde_json::from_value(serde_json::json!({ "status": status })).expect("health body")
}

// =============================================================
// Poll result mapping
// =============================================================

#[test]
fn healthy_body_connects() {
    let result = Ok(health("healthy"));
    assert_eq!(status_from_health(&result), ConnectionStatus::Connected);
}

#[test]
fn unhealthy_body_disconnects() {
    let result = Ok(health("degraded"));
    assert_eq!(status_from_health(&result), ConnectionStatus::Disconnected);
}

#[test]
fn network_failure_disconnects() {
    let result = Err(ApiError::Network {
        endpoint: "/api/health".to_owned(),
        cause: "connection refused".to_owned(),
    });
    assert_eq!(status_from_health(&result), ConnectionStatus::Disconnected);
}

#[test]
fn server_error_disconnects() {
    let result = Err(ApiError::from_status("/api/health", 500, None));
    assert_eq!(status_from_health(&result), ConnectionStatus::Disconnected);
}
