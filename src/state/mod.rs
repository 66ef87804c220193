//! Shared reactive state provided through Leptos contexts.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` is the session store at the heart of the app; `toasts` is the
//! notification queue every page reports user-facing failures to.

pub mod auth;
pub mod toasts;
