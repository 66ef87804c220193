//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability.

pub mod cv_insights;
pub mod file_extract;
pub mod logout_bus;
pub mod markdown;
pub mod session_store;
