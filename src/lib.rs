//! # sticky-tasks
//!
//! Leptos + WASM frontend for a personal sticky-note task board.
//!
//! Users sign in by email, receive a bearer token from the remote API, and
//! then manage their notes. The crate contains pages, components, client-side
//! state, the session store, and the request pipeline that authorizes every
//! outgoing API call.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
