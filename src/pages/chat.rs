//! Chat page: wires user intent to state transitions and API calls.
//!
//! FLOW
//! ====
//! Every turn is `Idle -> Sending -> (Success | Failed) -> Idle`. The page
//! starts a turn with [`ChatState::begin_send`], performs the HTTP call,
//! and applies exactly one finishing transition. Responses carry the epoch
//! they were issued under, so a reply landing after a reset or conversation
//! switch is discarded instead of mutating the new conversation.

use leptos::prelude::*;

use crate::components::history_panel::HistoryPanel;
use crate::components::message_list::MessageList;
use crate::components::status_bar::StatusBar;
use crate::components::user_input::UserInput;
use crate::net::api;
use crate::state::chat::ChatState;
use crate::state::connection::ConnectionStatus;

/// Single-page chat view: header, history panel, transcript, input.
#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let connection = expect_context::<RwSignal<ConnectionStatus>>();

    let do_send = move || {
        if !connection.get_untracked().allows_send() {
            return;
        }
        let mut ticket = None;
        chat.update(|c| ticket = c.begin_send());
        let Some(ticket) = ticket else {
            return;
        };
        let conversation_id = chat.with_untracked(|c| c.conversation_id.clone());

        leptos::task::spawn_local(async move {
            match api::send_message(&ticket.text, conversation_id.as_deref(), None).await {
                Ok(reply) => chat.update(|c| c.finish_send_ok(ticket.epoch, &reply)),
                Err(err) => {
                    if err.is_network() {
                        connection.set(ConnectionStatus::Disconnected);
                    }
                    chat.update(|c| c.finish_send_err(ticket.epoch, &err));
                }
            }
        });
    };

    let on_send = Callback::new(move |()| do_send());

    let on_load = Callback::new(move |conversation_id: String| {
        leptos::task::spawn_local(async move {
            match api::get_conversation(&conversation_id).await {
                Ok(detail) => {
                    chat.update(|c| c.load_conversation(detail.conversation_id.clone(), detail.messages));
                }
                Err(err) => chat.update(|c| c.finish_load_err(&err)),
            }
        });
    });

    let on_new_chat = move |_| chat.update(ChatState::new_conversation);

    let on_toggle_history = move |_| {
        chat.update(|c| {
            let visible = c.show_history_panel;
            c.set_history_panel(!visible);
        });
    };

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <div class="chat-page__brand">
                    <h1>"Conversational AI"</h1>
                    <StatusBar/>
                </div>
                <div class="chat-page__actions">
                    <button class="btn" on:click=on_toggle_history>
                        "History"
                    </button>
                    <button class="btn" on:click=on_new_chat>
                        "New Chat"
                    </button>
                </div>
            </header>

            <div class="chat-page__body">
                <HistoryPanel on_load=on_load/>
                <main class="chat-page__main">
                    <MessageList/>
                    <UserInput on_send=on_send/>
                </main>
            </div>
        </div>
    }
}
