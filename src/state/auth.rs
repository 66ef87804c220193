//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided app-wide as an `RwSignal` context; route guards, the navbar,
//! and user-aware pages read it, and every mutation keeps the persisted
//! `localStorage` record in sync.
//!
//! DESIGN
//! ======
//! Authentication is derived from `user` and `token` both being present
//! instead of being stored as a third field, so the invariant
//! "authenticated ⇔ user ∧ token" cannot drift. The state machine is
//! Anonymous → login → Authenticated → logout/forced-logout → Anonymous,
//! with no intermediate states.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;
use crate::util::session_store::{self, SessionRecord};

/// Authentication state tracking the current user, token, and startup
/// validation status.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    /// True until startup validation resolves; the shell blocks rendering
    /// behind it.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        AuthState { user: None, token: None, loading: true }
    }
}

/// What startup validation should do, given the rehydrated state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartupPlan {
    /// No persisted token: resolve immediately, stay anonymous.
    StayAnonymous,
    /// Token and user both rehydrated: trust the record, skip the
    /// network round-trip.
    TrustRehydrated,
    /// Token without a user: validate it with one profile fetch.
    ValidateToken,
}

impl AuthState {
    /// Authenticated means both the user record and the token are present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// Adopt a persisted record without touching storage. Used once at
    /// startup before validation runs.
    pub fn restore(&mut self, record: SessionRecord) {
        self.user = record.user;
        self.token = record.token;
    }

    /// Enter the authenticated state and persist the session. The token
    /// is stored as received; no format validation.
    pub fn login(&mut self, user: User, token: String) {
        self.user = Some(user);
        self.token = Some(token);
        self.persist();
    }

    /// Clear the session and remove the persisted record. Idempotent on
    /// an already-anonymous store.
    pub fn logout(&mut self) {
        self.user = None;
        self.token = None;
        session_store::clear();
    }

    /// Replace the user fields without altering the token (profile
    /// validation and edits), re-persisting the record.
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
        self.persist();
    }

    /// Decide the startup-validation path for the rehydrated state.
    pub fn startup_plan(&self) -> StartupPlan {
        if self.token.is_none() {
            StartupPlan::StayAnonymous
        } else if self.is_authenticated() {
            StartupPlan::TrustRehydrated
        } else {
            StartupPlan::ValidateToken
        }
    }

    fn persist(&self) {
        session_store::save(&SessionRecord {
            user: self.user.clone(),
            token: self.token.clone(),
        });
    }
}
