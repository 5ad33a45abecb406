//! Side panel listing the user's persisted conversations.

use chrono::Utc;
use leptos::prelude::*;

use crate::net::api;
use crate::state::chat::ChatState;
use crate::util::{session, time};

/// Conversation-history side panel.
///
/// Fetches summaries from the backend each time the panel opens, keyed by
/// the persisted guest identity. When no identity can be established the
/// list stays empty rather than failing the page.
#[component]
pub fn HistoryPanel(#[prop(into)] on_load: Callback<String>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let was_visible = RwSignal::new(false);

    Effect::new(move || {
        let visible = chat.get().show_history_panel;
        let opened = visible && !was_visible.get_untracked();
        was_visible.set(visible);
        if !opened {
            return;
        }

        leptos::task::spawn_local(async move {
            let Some(user_id) = session::ensure_user_id().await else {
                return;
            };
            match api::get_user_conversations(&user_id).await {
                Ok(list) => chat.update(|c| c.set_conversations(list)),
                Err(err) => leptos::logging::warn!("history fetch failed: {err}"),
            }
        });
    });

    view! {
        {move || {
            chat.get()
                .show_history_panel
                .then(|| {
                    let conversations = chat.get().conversations;
                    view! {
                        <div class="history-panel">
                            <div class="history-panel__header">
                                <h3>"Conversation History"</h3>
                                <button
                                    class="history-panel__close"
                                    on:click=move |_| chat.update(|c| c.set_history_panel(false))
                                >
                                    "\u{2715}"
                                </button>
                            </div>
                            <div class="history-panel__content">
                                {if conversations.is_empty() {
                                    view! {
                                        <div class="history-panel__empty">
                                            <p>"No previous conversations found."</p>
                                            <p>"Start a new chat to begin!"</p>
                                        </div>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="history-panel__list">
                                            {conversations
                                                .into_iter()
                                                .map(|summary| {
                                                    let id = summary.id.clone();
                                                    let age = time::relative_age(
                                                        &summary.created_at,
                                                        Utc::now(),
                                                    );
                                                    view! {
                                                        <button
                                                            class="history-panel__entry"
                                                            on:click=move |_| on_load.run(id.clone())
                                                        >
                                                            <span class="history-panel__title">
                                                                {summary.title.clone()}
                                                            </span>
                                                            <span class="history-panel__meta">
                                                                {format!(
                                                                    "{age} \u{b7} {} messages",
                                                                    summary.message_count,
                                                                )}
                                                            </span>
                                                        </button>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }}
                            </div>
                        </div>
                    }
                })
        }}
    }
}
