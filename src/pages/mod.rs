//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (data loading, form state,
//! API calls) and delegates shared rendering to `components`.

pub mod admin;
pub mod ai_analyze_cv;
pub mod ai_chat;
pub mod create_offer;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod my_applications;
pub mod offer_applications;
pub mod offer_detail;
pub mod profile;
pub mod register;
