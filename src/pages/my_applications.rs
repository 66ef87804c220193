//! Candidate view of their own applications.

use leptos::prelude::*;

use crate::net::types::Application;
use crate::state::toasts::{self, ToastState};

#[component]
pub fn MyApplicationsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let applications = RwSignal::new(Vec::<Application>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api_applications::list_mine().await {
            Ok(items) => applications.set(items),
            Err(err) => {
                toasts::show_error(toasts, "Could not load your applications", err.to_string());
            }
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = toasts;
    }

    view! {
        <div class="applications-page">
            <h1>"My applications"</h1>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="applications-page__empty">"Loading..."</p> }
            >
                {move || {
                    let items = applications.get();
                    if items.is_empty() {
                        view! {
                            <div class="applications-page__empty">
                                <h3>"No applications yet"</h3>
                                <p>"Browse the offers and apply to get started."</p>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="applications-page__list">
                                {items
                                    .into_iter()
                                    .map(|application| {
                                        let badge = format!(
                                            "badge badge--status-{}",
                                            application.status.as_str(),
                                        );
                                        let label = application.status.label();
                                        let offer = application.offer.clone();
                                        view! {
                                            <article class="application-card">
                                                <header class="application-card__head">
                                                    <h3>
                                                        {offer
                                                            .as_ref()
                                                            .map(|o| o.title.clone())
                                                            .unwrap_or_else(|| "Deleted offer".to_owned())}
                                                    </h3>
                                                    <span class=badge>{label}</span>
                                                </header>
                                                {offer
                                                    .as_ref()
                                                    .map(|o| {
                                                        view! {
                                                            <div class="offer-card__badges">
                                                                <span class="badge badge--outline">
                                                                    {o.localisation.clone()}
                                                                </span>
                                                                <span class="badge badge--outline">
                                                                    {o.salary.clone()}
                                                                </span>
                                                                <span class="badge badge--secondary">
                                                                    {o.contract.clone()}
                                                                </span>
                                                            </div>
                                                        }
                                                    })}
                                                <p class="application-card__date">
                                                    "Applied on " {application.created_at.clone()}
                                                </p>
                                                {offer
                                                    .map(|o| {
                                                        view! {
                                                            <a class="btn" href=format!("/offers/{}", o.id)>
                                                                "View the offer"
                                                            </a>
                                                        }
                                                    })}
                                            </article>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </Show>
        </div>
    }
}
