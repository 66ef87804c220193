//! Forced-logout broadcast between the HTTP layer and mounted shells.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTTP wrapper detects session invalidation but must not hold
//! references to UI state, so it publishes here and any mounted shell
//! resets itself on delivery. This is an explicit subscription registry
//! rather than a DOM event bus; the event loop is single-threaded, so a
//! thread-local registry is all the synchronization required.

#[cfg(test)]
#[path = "logout_bus_test.rs"]
mod logout_bus_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Why a logout was broadcast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoutReason {
    /// The server rejected the session token (401/403).
    TokenExpired,
    /// The user clicked logout.
    UserInitiated,
}

impl LogoutReason {
    /// Stable machine-readable tag, matching the wire payload of the
    /// original broadcast event.
    pub fn as_str(self) -> &'static str {
        match self {
            LogoutReason::TokenExpired => "token_expired",
            LogoutReason::UserInitiated => "user_initiated",
        }
    }
}

type Handler = Rc<dyn Fn(LogoutReason)>;

thread_local! {
    static SUBSCRIBERS: RefCell<Vec<(u64, Handler)>> = const { RefCell::new(Vec::new()) };
    static NEXT_ID: Cell<u64> = const { Cell::new(1) };
}

/// Handle returned by [`subscribe`]; pass back to [`unsubscribe`] on
/// component cleanup.
#[derive(Debug, PartialEq, Eq)]
pub struct Subscription(u64);

/// Register a handler for future logout broadcasts.
pub fn subscribe(handler: impl Fn(LogoutReason) + 'static) -> Subscription {
    let id = NEXT_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    });
    SUBSCRIBERS.with(|subs| subs.borrow_mut().push((id, Rc::new(handler))));
    Subscription(id)
}

/// Remove a handler; broadcasts after this call never reach it.
pub fn unsubscribe(subscription: Subscription) {
    SUBSCRIBERS.with(|subs| subs.borrow_mut().retain(|(id, _)| *id != subscription.0));
}

/// Deliver `reason` to every live subscriber. Publishing with no
/// subscribers is a no-op.
pub fn publish(reason: LogoutReason) {
    // Snapshot first so handlers may subscribe/unsubscribe re-entrantly.
    let handlers: Vec<Handler> =
        SUBSCRIBERS.with(|subs| subs.borrow().iter().map(|(_, h)| h.clone()).collect());
    for handler in handlers {
        handler(reason);
    }
}

#[cfg(test)]
fn subscriber_count() -> usize {
    SUBSCRIBERS.with(|subs| subs.borrow().len())
}
