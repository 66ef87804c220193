//! Offer detail page.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::{Offer, Role};
use crate::state::auth::AuthState;
use crate::state::toasts::{self, ToastState};

#[component]
pub fn OfferDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    let offer = RwSignal::new(None::<Offer>);
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        let navigate = navigate.clone();
        let offer_id = params.get_untracked().get("id").unwrap_or_default();
        leptos::task::spawn_local(async move {
            match crate::net::api_offers::fetch(&offer_id).await {
                Ok(loaded) => offer.set(Some(loaded)),
                Err(err) => {
                    toasts::show_error(toasts, "Could not load the offer", err.to_string());
                    navigate("/", leptos_router::NavigateOptions::default());
                }
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (&params, &navigate);
    }

    let is_student = move || auth.get().user.map(|user| user.role) == Some(Role::Student);

    // TODO: call the applications endpoint once the backend exposes a
    // POST for candidate submissions; today this only acknowledges.
    let on_apply = move |_| {
        toasts::show_success(toasts, "Application sent to the recruiter");
    };

    view! {
        <div class="offer-detail-page">
            <a class="btn" href="/">
                "Back"
            </a>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="offer-detail-page__empty">"Loading..."</p> }
            >
                {move || {
                    offer
                        .get()
                        .map(|offer| {
                            view! {
                                <article class="offer-detail">
                                    <header class="offer-detail__head">
                                        <h1>{offer.title.clone()}</h1>
                                        <div class="offer-card__badges">
                                            <span class="badge badge--outline">
                                                {offer.localisation.clone()}
                                            </span>
                                            <span class="badge badge--outline">{offer.salary.clone()}</span>
                                            <span class="badge badge--secondary">
                                                {offer.contract.clone()}
                                            </span>
                                        </div>
                                    </header>
                                    <section class="offer-detail__description">
                                        <h2>"Description"</h2>
                                        <p>{offer.description.clone()}</p>
                                    </section>
                                    {(!offer.competences.is_empty())
                                        .then(|| {
                                            view! {
                                                <section class="offer-detail__competences">
                                                    <h2>"Competences"</h2>
                                                    <div class="offer-card__badges">
                                                        {offer
                                                            .competences
                                                            .iter()
                                                            .map(|c| {
                                                                view! {
                                                                    <span class="badge badge--secondary">
                                                                        {c.name.clone()}
                                                                    </span>
                                                                }
                                                            })
                                                            .collect::<Vec<_>>()}
                                                    </div>
                                                </section>
                                            }
                                        })}
                                    {offer
                                        .author
                                        .as_ref()
                                        .map(|author| {
                                            view! {
                                                <p class="offer-detail__author">
                                                    "Published by " {author.name.clone()}
                                                </p>
                                            }
                                        })}
                                    <Show when=is_student>
                                        <button class="btn btn--primary" on:click=on_apply>
                                            "Apply now"
                                        </button>
                                    </Show>
                                </article>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
