//! Top navigation shell.
//!
//! Shows role-dependent links for authenticated users, login/register
//! actions otherwise, and hides the whole nav strip on the auth pages
//! themselves. Links are plain anchors; the router intercepts them for
//! client-side navigation.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::net::types::Role;
use crate::state::auth::AuthState;

/// A navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}

const fn link(path: &'static str, label: &'static str) -> NavLink {
    NavLink { path, label }
}

/// Links shown for a given role.
fn nav_links(role: Role) -> Vec<NavLink> {
    let mut links = vec![link("/", "Home"), link("/profile", "Profile")];
    if role == Role::Student {
        links.push(link("/applications", "My applications"));
        links.push(link("/ai/analyze-cv", "CV analysis"));
    }
    links.push(link("/ai/chat", "Assistant"));
    if role == Role::Admin {
        links.push(link("/admin", "Admin"));
    }
    links
}

/// Pages where the nav strip is hidden (the page itself is the action).
fn is_auth_page(path: &str) -> bool {
    matches!(path, "/login" | "/register")
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;

    let on_auth_page = move || is_auth_page(&pathname.get());
    let role = move || auth.get().user.map(|user| user.role);

    let on_logout = move |_| {
        auth.update(AuthState::logout);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">
                "WorkBridge"
            </a>

            <Show when=move || auth.get().is_authenticated() && !on_auth_page()>
                <nav class="navbar__links">
                    {move || {
                        role()
                            .map(nav_links)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|entry| {
                                let class = if pathname.get() == entry.path {
                                    "navbar__link navbar__link--active"
                                } else {
                                    "navbar__link"
                                };
                                view! {
                                    <a class=class href=entry.path>
                                        {entry.label}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </nav>
                <div class="navbar__session">
                    <span class="navbar__user">
                        {move || auth.get().user.map(|user| user.name).unwrap_or_default()}
                    </span>
                    <button class="btn navbar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </Show>

            <Show when=move || !auth.get().is_authenticated() && !on_auth_page()>
                <div class="navbar__session">
                    <a class="btn" href="/login">
                        "Sign in"
                    </a>
                    <a class="btn btn--primary" href="/register">
                        "Create account"
                    </a>
                </div>
            </Show>
        </header>
    }
}
