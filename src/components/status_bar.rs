//! Connectivity indicator driven by the health poll.

use leptos::prelude::*;

use crate::state::connection::ConnectionStatus;

/// Status dot and label for backend reachability.
#[component]
pub fn StatusBar() -> impl IntoView {
    let connection = expect_context::<RwSignal<ConnectionStatus>>();

    let status_class = move || match connection.get() {
        ConnectionStatus::Connected => "status-bar__dot status-bar__dot--online",
        ConnectionStatus::Checking => "status-bar__dot status-bar__dot--checking",
        ConnectionStatus::Disconnected => "status-bar__dot status-bar__dot--offline",
    };

    let status_label = move || match connection.get() {
        ConnectionStatus::Connected => "Online",
        ConnectionStatus::Checking => "Checking...",
        ConnectionStatus::Disconnected => "Offline",
    };

    view! {
        <div class="status-bar">
            <span class=status_class></span>
            <span class="status-bar__label">{status_label}</span>
        </div>
    }
}
