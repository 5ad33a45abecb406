//! Periodic backend health poll driving the connectivity indicator.
//!
//! Fixed interval for the lifetime of the session; no backoff, no jitter,
//! no teardown hook. The poll mutates only the connectivity signal, so it
//! can run while a message send is in flight.

#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

use std::time::Duration;

use crate::net::api::ApiError;
use crate::net::types::HealthResponse;
use crate::state::connection::ConnectionStatus;

/// Interval between health checks.
pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Map one health-check outcome to a connectivity status. A 2xx response
/// that does not report `status: "healthy"` still counts as disconnected.
pub fn status_from_health(result: &Result<HealthResponse, ApiError>) -> ConnectionStatus {
    match result {
        Ok(health) if health.is_healthy() => ConnectionStatus::Connected,
        _ => ConnectionStatus::Disconnected,
    }
}

/// Spawn the poll loop as a local task. Browser-only; elsewhere this is a
/// no-op so the app component compiles natively.
#[cfg(feature = "csr")]
pub fn spawn_health_poll(connection: leptos::prelude::RwSignal<ConnectionStatus>) {
    use leptos::prelude::Set;

    leptos::task::spawn_local(async move {
        loop {
            let result = crate::net::api::health_check().await;
            connection.set(status_from_health(&result));
            gloo_timers::future::sleep(POLL_INTERVAL).await;
        }
    });
}

#[cfg(not(feature = "csr"))]
pub fn spawn_health_poll(connection: leptos::prelude::RwSignal<ConnectionStatus>) {
    let _ = connection;
}
