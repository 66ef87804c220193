//! Login page with email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::state::auth::AuthState;
use crate::state::toasts::{self, ToastState};

/// Client-side validation mirroring the server's constraints.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Where to go after a successful sign-in: the guarded origin when the
/// route guard recorded one, the dashboard otherwise. Only same-origin
/// absolute paths are honored.
fn post_login_target(from: Option<&str>) -> String {
    match from {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => "/".to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    toasts::show_error(toasts, "Sign-in failed", message);
                    return;
                }
            };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let target = post_login_target(query.get().get("from").as_deref());
            leptos::task::spawn_local(async move {
                match crate::net::api_users::login(&email_value, &password_value).await {
                    Ok(payload) => {
                        auth.update(|state| state.login(payload.user, payload.token));
                        toasts::show_success(toasts, "Signed in");
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&target);
                        }
                    }
                    Err(err) => {
                        toasts::show_error(toasts, "Sign-in failed", err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&query, email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <p class="auth-card__subtitle">"Sign in to access the platform"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "No account yet? "
                    <a href="/register">"Create one"</a>
                </p>
            </div>
        </div>
    }
}
