//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::chat::ChatPage;
use crate::state::chat::ChatState;
use crate::state::connection::ConnectionStatus;

/// Root application component.
///
/// Creates the session-scoped state containers, provides them as contexts,
/// and starts the connectivity poll. State is owned here rather than at
/// module level so each mounted app gets its own lifecycle.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let chat = RwSignal::new(ChatState::new());
    let connection = RwSignal::new(ConnectionStatus::default());

    provide_context(chat);
    provide_context(connection);

    crate::net::health::spawn_health_poll(connection);

    view! {
        <Stylesheet id="leptos" href="/pkg/chat-client.css"/>
        <Title text="Conversational AI"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
            </Routes>
        </Router>
    }
}
