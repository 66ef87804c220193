//! # workbridge
//!
//! Leptos + WASM single-page client for the WorkBridge recruitment
//! platform: offer browsing and publishing, application tracking,
//! candidate profiles, an admin console, and AI-assisted CV analysis.
//!
//! The session/auth lifecycle is the structural core: `net::api` attaches
//! the persisted bearer token to every request and intercepts session
//! invalidation, `state::auth` owns the store, `app` validates the
//! persisted token once at startup, and `components::protected_route`
//! gates the guarded routes.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Warn);
    leptos::mount::hydrate_body(App);
}
