//! Dashboard page listing offers with search, filters, and role-aware
//! actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Students get offers scored by
//! the matching endpoint; recruiters and admins get the plain listing.
//! Admins additionally see aggregate stat cards.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::offer_card::OfferCard;
use crate::components::stat_card::StatCard;
use crate::net::types::{Offer, Role};
use crate::state::auth::AuthState;
use crate::state::toasts::{self, ToastState};

/// Case-insensitive search over title and description, plus a
/// localisation filter. Empty terms match everything.
fn filter_offers(offers: &[Offer], search: &str, location: &str) -> Vec<Offer> {
    let search = search.to_lowercase();
    let location = location.to_lowercase();
    offers
        .iter()
        .filter(|offer| {
            let matches_search = search.is_empty()
                || offer.title.to_lowercase().contains(&search)
                || offer.description.to_lowercase().contains(&search);
            let matches_location =
                location.is_empty() || offer.localisation.to_lowercase().contains(&location);
            matches_search && matches_location
        })
        .cloned()
        .collect()
}

/// Distinct publishing recruiters across the listing.
fn distinct_recruiters(offers: &[Offer]) -> usize {
    let mut names: Vec<&str> =
        offers.iter().filter_map(|offer| offer.author.as_ref().map(|a| a.name.as_str())).collect();
    names.sort_unstable();
    names.dedup();
    names.len()
}

/// Offers created at or after `cutoff`. ISO 8601 timestamps compare
/// lexicographically, so no date parsing is needed.
fn count_created_since(offers: &[Offer], cutoff: &str) -> usize {
    offers.iter().filter(|offer| offer.created_at.as_str() >= cutoff).count()
}

/// ISO timestamp of one week ago, for the "new this week" stat.
#[cfg(feature = "hydrate")]
fn week_ago_iso() -> String {
    const WEEK_MS: f64 = 7.0 * 24.0 * 60.0 * 60.0 * 1000.0;
    let now_ms = js_sys::Date::now();
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(now_ms - WEEK_MS));
    String::from(date.to_iso_string())
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let offers = RwSignal::new(Vec::<Offer>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let location_filter = RwSignal::new(String::new());

    let role = move || auth.get().user.map(|user| user.role);
    let is_student = move || role() == Some(Role::Student);
    let is_recruiter = move || role() == Some(Role::Entreprise);
    let is_admin = move || role() == Some(Role::Admin);

    // Students go through the matching endpoint so cards carry scores.
    #[cfg(feature = "hydrate")]
    {
        let student = is_student();
        leptos::task::spawn_local(async move {
            let loaded = if student {
                crate::net::api_offers::list_matching().await
            } else {
                crate::net::api_offers::list().await
            };
            match loaded {
                Ok(items) => offers.set(items),
                Err(err) => toasts::show_error(toasts, "Could not load offers", err.to_string()),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = toasts;
    }

    let welcome_name = move || auth.get().user.map(|user| user.name).unwrap_or_default();

    let stats = move || {
        let items = offers.get();
        #[cfg(feature = "hydrate")]
        let fresh = count_created_since(&items, &week_ago_iso());
        #[cfg(not(feature = "hydrate"))]
        let fresh = count_created_since(&items, "9999");
        (items.len(), fresh, distinct_recruiters(&items))
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <div>
                    <h1>
                        {move || {
                            if is_recruiter() { "Recruiter dashboard" } else { "Explore opportunities" }
                        }}
                    </h1>
                    <p class="dashboard-page__welcome">"Welcome, " {welcome_name}</p>
                </div>
                <Show when=is_recruiter>
                    <a class="btn btn--primary" href="/offers/new">
                        "+ New offer"
                    </a>
                </Show>
            </header>

            <Show when=is_admin>
                {move || {
                    let (total, fresh, recruiters) = stats();
                    view! {
                        <div class="dashboard-page__stats">
                            <StatCard title="Open offers" value=total.to_string()/>
                            <StatCard title="New this week" value=fresh.to_string()/>
                            <StatCard title="Active recruiters" value=recruiters.to_string()/>
                        </div>
                    }
                }}
            </Show>

            <div class="dashboard-page__filters">
                <input
                    class="dashboard-page__search"
                    type="search"
                    placeholder="Search a role, a skill..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <input
                    class="dashboard-page__search"
                    type="search"
                    placeholder="Location..."
                    prop:value=move || location_filter.get()
                    on:input=move |ev| location_filter.set(event_target_value(&ev))
                />
            </div>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="dashboard-page__empty">"Loading offers..."</p> }
            >
                {move || {
                    let visible = filter_offers(&offers.get(), &search.get(), &location_filter.get());
                    if visible.is_empty() {
                        view! {
                            <div class="dashboard-page__empty">
                                <h3>"No offers found"</h3>
                                <p>
                                    {if offers.get().is_empty() {
                                        "No offers are available right now."
                                    } else {
                                        "Try adjusting your search criteria."
                                    }}
                                </p>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="dashboard-page__grid">
                                {visible
                                    .into_iter()
                                    .map(|offer| {
                                        view! {
                                            <OfferCard
                                                offer=offer
                                                show_matching=is_student()
                                                show_applications=is_recruiter()
                                            />
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
