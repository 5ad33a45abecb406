//! Conversation transcript: message bubbles plus the typing indicator.

use leptos::prelude::*;

use crate::state::chat::{ChatState, Role};

/// Ordered message log for the active conversation.
///
/// Auto-scrolls to the bottom whenever a message is appended, and shows a
/// typing indicator while a send is in flight.
#[component]
pub fn MessageList() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="message-list" node_ref=messages_ref>
            {move || {
                chat.get()
                    .messages
                    .iter()
                    .map(|msg| {
                        let is_user = msg.role == Role::User;
                        let content = msg.content.clone();
                        view! {
                            <div
                                class="message-list__message"
                                class:message-list__message--user=is_user
                            >
                                <span class="message-list__role">{msg.role.as_str()}</span>
                                <div class="message-list__content">{content}</div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            {move || {
                chat.get()
                    .loading
                    .then(|| view! { <div class="message-list__typing">"Thinking..."</div> })
            }}
        </div>
    }
}
