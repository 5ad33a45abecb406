//! Draft input row with Enter-to-send.

use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::state::connection::ConnectionStatus;

/// Message draft input and send button.
///
/// The draft lives in `ChatState` (not component-local state) so a send can
/// clear it atomically with the optimistic append. Sending is withheld
/// while a request is in flight or the backend is known unreachable.
#[component]
pub fn UserInput(#[prop(into)] on_send: Callback<()>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let connection = expect_context::<RwSignal<ConnectionStatus>>();

    let blocked = move || {
        let state = chat.get();
        state.loading || !connection.get().allows_send()
    };
    let can_send = move || !blocked() && !chat.get().user_input.trim().is_empty();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            on_send.run(());
        }
    };

    view! {
        <div class="user-input">
            <textarea
                class="user-input__field"
                placeholder="Type your message here..."
                rows="1"
                prop:value=move || chat.get().user_input
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    chat.update(|c| c.set_user_input(value));
                }
                on:keydown=on_keydown
                disabled=blocked
            ></textarea>
            <button
                class="btn btn--primary user-input__send"
                on:click=move |_| on_send.run(())
                disabled=move || !can_send()
            >
                {move || if chat.get().loading { "..." } else { "Send" }}
            </button>
        </div>
    }
}
