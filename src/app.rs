//! Root application component with routing, context providers, and the
//! startup session-validation gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth store and toast queue live here as contexts. On mount the app
//! rehydrates the persisted session, validates it with at most one
//! profile fetch, and blocks route rendering behind a loader until that
//! resolves. It also subscribes to the forced-logout broadcast so the
//! HTTP layer can invalidate the session without holding UI references.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::protected_route::RequireAuth;
use crate::components::toaster::Toaster;
use crate::pages::admin::AdminPage;
use crate::pages::ai_analyze_cv::AiAnalyzeCvPage;
use crate::pages::ai_chat::AiChatPage;
use crate::pages::create_offer::CreateOfferPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::my_applications::MyApplicationsPage;
use crate::pages::offer_applications::OfferApplicationsPage;
use crate::pages::offer_detail::OfferDetailPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::state::auth::AuthState;
use crate::state::toasts::ToastState;

#[cfg(feature = "hydrate")]
use crate::state::auth::StartupPlan;
#[cfg(feature = "hydrate")]
use crate::util::logout_bus;
#[cfg(feature = "hydrate")]
use crate::util::session_store;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Startup validation: rehydrate the persisted session, then validate the
/// token with at most one profile fetch. The `loading` flag flips to
/// false exactly once, when the chosen path resolves.
fn init_auth(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(record) = session_store::load() {
            auth.update(|state| state.restore(record));
        }
        match auth.get_untracked().startup_plan() {
            StartupPlan::StayAnonymous | StartupPlan::TrustRehydrated => {
                auth.update(|state| state.loading = false);
            }
            StartupPlan::ValidateToken => {
                leptos::task::spawn_local(async move {
                    match crate::net::api_users::fetch_profile().await {
                        Ok(profile) => auth.update(|state| state.set_user(profile.as_user())),
                        // Auth failures have already cleared storage and
                        // navigated via the HTTP wrapper. Everything else
                        // also ends the session: a token we cannot
                        // validate is treated as untrustworthy.
                        Err(_) => auth.update(AuthState::logout),
                    }
                    auth.update(|state| state.loading = false);
                });
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        // The server renders the blocking loader; hydration validates.
        let _ = auth;
    }
}

/// Root application component.
///
/// Provides shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    init_auth(auth);

    // Forced-logout broadcast: reset local auth state when the HTTP layer
    // invalidates the session. Storage is already cleared by then.
    #[cfg(feature = "hydrate")]
    {
        let subscription = logout_bus::subscribe(move |_reason| {
            auth.update(|state| {
                state.user = None;
                state.token = None;
            });
        });
        on_cleanup(move || logout_bus::unsubscribe(subscription));
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/workbridge.css"/>
        <Title text="WorkBridge"/>

        <Router>
            <Navbar/>
            <Toaster/>
            <Show
                when=move || !auth.get().loading
                fallback=move || {
                    view! {
                        <div class="app-loader">
                            <p>"Loading..."</p>
                        </div>
                    }
                }
            >
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=(StaticSegment("offers"), StaticSegment("new"))
                        view=|| view! { <RequireAuth><CreateOfferPage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("offers"), ParamSegment("id"))
                        view=|| view! { <RequireAuth><OfferDetailPage/></RequireAuth> }
                    />
                    <Route
                        path=(
                            StaticSegment("offers"),
                            ParamSegment("id"),
                            StaticSegment("applications"),
                        )
                        view=|| view! { <RequireAuth><OfferApplicationsPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("applications")
                        view=|| view! { <RequireAuth><MyApplicationsPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <RequireAuth><ProfilePage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <RequireAuth><AdminPage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("ai"), StaticSegment("analyze-cv"))
                        view=|| view! { <RequireAuth><AiAnalyzeCvPage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("ai"), StaticSegment("chat"))
                        view=|| view! { <RequireAuth><AiChatPage/></RequireAuth> }
                    />
                </Routes>
            </Show>
        </Router>
    }
}
