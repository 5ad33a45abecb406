//! # chat-client
//!
//! Leptos + WASM browser client for the conversational AI backend. Replaces
//! the React frontend with a Rust-native UI layer: a message transcript, a
//! draft input, a conversation-history side panel, and a thin REST client.
//!
//! The conversation state machine (`state`) and the wire layer (`net`) are
//! browser-independent and unit-tested natively; all HTTP and DOM access is
//! gated behind the `csr` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: mount the app onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
