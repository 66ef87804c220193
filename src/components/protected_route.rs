//! Route guard for session-gated views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every route that requires a session. The decision is pure and
//! synchronous over the auth store, with no network calls, and the guarded
//! children are never mounted on the redirect path. The shell only
//! renders routes after startup validation resolves, so the guard never
//! sees a half-initialized store.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::auth::AuthState;

/// Render protected content iff the store holds both a user and a token.
fn guard_allows(auth: &AuthState) -> bool {
    auth.is_authenticated()
}

/// Login path carrying the origin for best-effort post-login return.
fn login_redirect_path(origin: &str) -> String {
    if origin.is_empty() || origin == "/" {
        "/login".to_owned()
    } else {
        format!("/login?from={origin}")
    }
}

/// Gate `children` behind an authenticated session, redirecting to
/// `/login` otherwise.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;

    view! {
        <Show
            when=move || auth.with(guard_allows)
            fallback=move || {
                let target = login_redirect_path(&pathname.get());
                view! { <Redirect path=target/> }
            }
        >
            {children()}
        </Show>
    }
}
