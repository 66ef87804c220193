//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP wrapper (bearer attach, envelope decode, session
//! invalidation), the `api_*` siblings wrap per-resource endpoints, and
//! `types` defines the wire schema.

pub mod api;
pub mod api_ai;
pub mod api_applications;
pub mod api_offers;
pub mod api_users;
pub mod types;
