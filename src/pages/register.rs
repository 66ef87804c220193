//! Registration page for candidate accounts.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::state::toasts::{self, ToastState};

/// Validated registration fields.
#[derive(Clone, Debug, PartialEq, Eq)]
struct RegistrationInput {
    name: String,
    email: String,
    password: String,
}

fn validate_registration_input(
    name: &str,
    email: &str,
    password: &str,
) -> Result<RegistrationInput, &'static str> {
    let name = name.trim();
    if name.chars().count() < 2 {
        return Err("Name is too short.");
    }
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters.");
    }
    Ok(RegistrationInput {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_registration_input(&name.get(), &email.get(), &password.get()) {
            Ok(input) => input,
            Err(message) => {
                toasts::show_error(toasts, "Registration failed", message);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api_users::register(&input.name, &input.email, &input.password)
                    .await
                {
                    Ok(()) => {
                        toasts::show_success(toasts, "Account created, you can now sign in");
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/login");
                        }
                    }
                    Err(err) => {
                        toasts::show_error(toasts, "Registration failed", err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <p class="auth-card__subtitle">"Join the platform as a candidate"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Name"
                        <input
                            class="auth-form__input"
                            type="text"
                            autocomplete="name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
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
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Create account" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
