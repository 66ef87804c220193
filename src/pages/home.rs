//! Root route: landing hero for anonymous visitors, dashboard for
//! authenticated users.

use leptos::prelude::*;

use crate::pages::dashboard::DashboardPage;
use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <Show when=move || auth.get().is_authenticated() fallback=LandingPage>
            <DashboardPage/>
        </Show>
    }
}

/// Public landing page.
#[component]
fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <h1>"Welcome to WorkBridge"</h1>
            <p class="landing-page__subtitle">
                "A recruitment platform connecting candidates and recruiters, with an AI copilot for CVs and offers."
            </p>
            <div class="landing-page__actions">
                <a class="btn btn--primary" href="/register">
                    "Get started"
                </a>
                <a class="btn" href="/login">
                    "Sign in"
                </a>
            </div>
        </div>
    }
}
