//! Reusable view components for the chat page.

pub mod history_panel;
pub mod message_list;
pub mod status_bar;
pub mod user_input;
