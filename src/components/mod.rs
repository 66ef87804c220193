//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome and shared widgets while reading shared state
//! from Leptos context providers; `protected_route` is the session gate
//! every guarded route mounts behind.

pub mod navbar;
pub mod offer_card;
pub mod protected_route;
pub mod stat_card;
pub mod toaster;
