//! Persisted auth-session record in browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTTP wrapper reads the token from here on every request and clears
//! the record on forced logout; the auth store writes it on login/logout.
//! A record that fails to decode is treated as absent so requests proceed
//! unauthenticated instead of blocking; the branch is logged, not silent.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use serde::{Deserialize, Serialize};

use crate::net::types::User;

/// Well-known storage key holding the serialized session.
pub const STORAGE_KEY: &str = "auth-storage";

/// The session fields persisted across reloads.
///
/// Authenticated means both fields are present; there is deliberately no
/// stored boolean that could drift out of sync with them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
}

/// On-disk wrapper: the record lives under a `state` key.
#[derive(Serialize, Deserialize)]
struct PersistedState {
    state: SessionRecord,
}

/// Serialize a record to its storage representation.
pub(crate) fn encode(record: &SessionRecord) -> Option<String> {
    serde_json::to_string(&PersistedState { state: record.clone() }).ok()
}

/// Decode a raw storage value.
///
/// # Errors
///
/// Returns the serde error for corrupt or foreign values; callers decide
/// whether to log it.
pub(crate) fn decode(raw: &str) -> Result<SessionRecord, serde_json::Error> {
    serde_json::from_str::<PersistedState>(raw).map(|p| p.state)
}

/// Load the persisted session, if any.
///
/// A present-but-unreadable record logs a warning and reads as `None` so
/// the caller stays on the unauthenticated path.
pub fn load() -> Option<SessionRecord> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
        match decode(&raw) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("persisted session unreadable, continuing unauthenticated: {err}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session record.
pub fn save(record: &SessionRecord) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        let Some(raw) = encode(record) else {
            return;
        };
        let _ = storage.set_item(STORAGE_KEY, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = record;
    }
}

/// Remove the persisted record entirely.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

/// Convenience accessor for the bearer token, if one is persisted.
pub fn token() -> Option<String> {
    load().and_then(|record| record.token)
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
