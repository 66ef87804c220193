//! Recruiter view of the applications received by one offer.

#[cfg(test)]
#[path = "offer_applications_test.rs"]
mod offer_applications_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::{Application, ApplicationStatus, Offer};
use crate::state::toasts::{self, ToastState};

/// Apply a status change to the local list after the server accepted it.
fn apply_status(applications: &mut [Application], application_id: &str, status: ApplicationStatus) {
    if let Some(application) = applications.iter_mut().find(|a| a.id == application_id) {
        application.status = status;
    }
}

#[component]
pub fn OfferApplicationsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();

    let offer = RwSignal::new(None::<Offer>);
    let applications = RwSignal::new(Vec::<Application>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        let offer_id = params.get_untracked().get("id").unwrap_or_default();
        leptos::task::spawn_local(async move {
            match crate::net::api_offers::fetch(&offer_id).await {
                Ok(loaded) => offer.set(Some(loaded)),
                Err(err) => toasts::show_error(toasts, "Could not load the offer", err.to_string()),
            }
            match crate::net::api_applications::list_for_offer(&offer_id).await {
                Ok(items) => applications.set(items),
                Err(err) => {
                    toasts::show_error(toasts, "Could not load applications", err.to_string());
                }
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (&params, toasts);
    }

    let on_status_change = move |application_id: String, status: ApplicationStatus| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_applications::set_status(&application_id, status).await {
                Ok(()) => {
                    applications.update(|items| apply_status(items, &application_id, status));
                    toasts::show_success(toasts, "Application updated");
                }
                Err(err) => {
                    toasts::show_error(toasts, "Could not update the application", err.to_string());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (application_id, status);
        }
    };

    view! {
        <div class="applications-page">
            <a class="btn" href="/">
                "Back"
            </a>
            <h1>
                {move || {
                    offer
                        .get()
                        .map_or_else(
                            || "Applications".to_owned(),
                            |o| format!("Applications for {}", o.title),
                        )
                }}
            </h1>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="applications-page__empty">"Loading..."</p> }
            >
                {move || {
                    let items = applications.get();
                    if items.is_empty() {
                        view! {
                            <div class="applications-page__empty">
                                <h3>"No applications received"</h3>
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
                                        let current = application.status;
                                        let application_id = application.id.clone();
                                        view! {
                                            <article class="application-card">
                                                <header class="application-card__head">
                                                    <h3>
                                                        {application
                                                            .applicant
                                                            .as_ref()
                                                            .map(|u| u.name.clone())
                                                            .unwrap_or_else(|| "Unknown candidate".to_owned())}
                                                    </h3>
                                                    <span class=badge>{current.label()}</span>
                                                </header>
                                                {application
                                                    .applicant
                                                    .as_ref()
                                                    .map(|u| {
                                                        view! {
                                                            <p class="application-card__email">{u.email.clone()}</p>
                                                        }
                                                    })}
                                                {application
                                                    .cover_letter
                                                    .clone()
                                                    .map(|letter| {
                                                        view! { <p class="application-card__letter">{letter}</p> }
                                                    })}
                                                <div class="application-card__actions">
                                                    {ApplicationStatus::ALL
                                                        .into_iter()
                                                        .filter(|status| *status != current)
                                                        .map(|status| {
                                                            let application_id = application_id.clone();
                                                            view! {
                                                                <button
                                                                    class="btn btn--small"
                                                                    on:click=move |_| on_status_change(
                                                                        application_id.clone(),
                                                                        status,
                                                                    )
                                                                >
                                                                    {status.label()}
                                                                </button>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </div>
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
