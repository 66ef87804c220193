//! Profile page: identity fields, competences, and work history.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::types::{Competence, ProfileUpdate, UserProfile};
use crate::state::auth::AuthState;
use crate::state::toasts::{self, ToastState};

/// Catalogue entries not yet attached to the profile, for the add menu.
fn selectable_competences(catalogue: &[Competence], owned: &[Competence]) -> Vec<Competence> {
    catalogue.iter().filter(|c| !owned.iter().any(|o| o.id == c.id)).cloned().collect()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let profile = RwSignal::new(None::<UserProfile>);
    let catalogue = RwSignal::new(Vec::<Competence>::new());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let attaching = RwSignal::new(false);

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let about = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let selected_competence = RwSignal::new(String::new());

    let adopt_profile = move |loaded: UserProfile| {
        name.set(loaded.name.clone());
        email.set(loaded.email.clone());
        about.set(loaded.about.clone().unwrap_or_default());
        address.set(loaded.address.clone().unwrap_or_default());
        profile.set(Some(loaded));
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api_users::fetch_profile().await {
            Ok(loaded) => adopt_profile(loaded),
            Err(err) => toasts::show_error(toasts, "Could not load the profile", err.to_string()),
        }
        match crate::net::api_users::list_competences().await {
            Ok(items) => catalogue.set(items),
            Err(err) => {
                toasts::show_error(toasts, "Could not load competences", err.to_string());
            }
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = &adopt_profile;
    }

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let Some(current) = profile.get_untracked() else {
            return;
        };
        let name_value = name.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        if name_value.chars().count() < 2 || !email_value.contains('@') {
            toasts::show_error(toasts, "Invalid profile", "Check the name and email fields");
            return;
        }
        let about_value = about.get().trim().to_owned();
        let address_value = address.get().trim().to_owned();
        let update = ProfileUpdate {
            name: name_value,
            email: email_value,
            about: (!about_value.is_empty()).then_some(about_value),
            address: (!address_value.is_empty()).then_some(address_value),
        };
        saving.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_users::update_profile(&current.id, &update).await {
                Ok(updated) => {
                    // Keep the auth store's compact user in sync with edits.
                    auth.update(|state| state.set_user(updated.as_user()));
                    adopt_profile(updated);
                    toasts::show_success(toasts, "Profile saved");
                }
                Err(err) => toasts::show_error(toasts, "Could not save the profile", err.to_string()),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth, current, update);
        }
    };

    let on_attach = move |_| {
        if attaching.get() {
            return;
        }
        let Ok(competence_id) = selected_competence.get().parse::<i64>() else {
            return;
        };
        attaching.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_users::attach_competences(&[competence_id]).await {
                Ok(()) => {
                    toasts::show_success(toasts, "Competence added");
                    selected_competence.set(String::new());
                    // Re-fetch so the owned list reflects the server state.
                    if let Ok(loaded) = crate::net::api_users::fetch_profile().await {
                        adopt_profile(loaded);
                    }
                }
                Err(err) => {
                    toasts::show_error(toasts, "Could not add the competence", err.to_string());
                }
            }
            attaching.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = competence_id;
        }
    };

    view! {
        <div class="profile-page">
            <h1>"My profile"</h1>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="profile-page__empty">"Loading..."</p> }
            >
                {move || {
                    profile
                        .get()
                        .map(|current| {
                            let role_label = current.role.label();
                            let owned = current.competences.clone();
                            let options = selectable_competences(&catalogue.get(), &owned);
                            let experiences = current.experiences.clone();
                            view! {
                                <div class="profile-page__layout">
                                    <section class="profile-page__section">
                                        <header class="profile-page__head">
                                            <h2>{current.name.clone()}</h2>
                                            <span class="badge badge--secondary">{role_label}</span>
                                        </header>
                                        <form class="auth-form" on:submit=on_save>
                                            <label class="auth-form__label">
                                                "Name"
                                                <input
                                                    class="auth-form__input"
                                                    type="text"
                                                    prop:value=move || name.get()
                                                    on:input=move |ev| name.set(event_target_value(&ev))
                                                />
                                            </label>
                                            <label class="auth-form__label">
                                                "Email"
                                                <input
                                                    class="auth-form__input"
                                                    type="email"
                                                    prop:value=move || email.get()
                                                    on:input=move |ev| email.set(event_target_value(&ev))
                                                />
                                            </label>
                                            <label class="auth-form__label">
                                                "About"
                                                <textarea
                                                    class="auth-form__input"
                                                    prop:value=move || about.get()
                                                    on:input=move |ev| about.set(event_target_value(&ev))
                                                ></textarea>
                                            </label>
                                            <label class="auth-form__label">
                                                "Address"
                                                <input
                                                    class="auth-form__input"
                                                    type="text"
                                                    prop:value=move || address.get()
                                                    on:input=move |ev| address.set(event_target_value(&ev))
                                                />
                                            </label>
                                            <button
                                                class="btn btn--primary"
                                                type="submit"
                                                disabled=move || saving.get()
                                            >
                                                {move || if saving.get() { "Saving..." } else { "Save" }}
                                            </button>
                                        </form>
                                    </section>

                                    <section class="profile-page__section">
                                        <h2>"Competences"</h2>
                                        <div class="offer-card__badges">
                                            {owned
                                                .iter()
                                                .map(|c| {
                                                    view! {
                                                        <span class="badge badge--secondary">{c.name.clone()}</span>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                        <div class="profile-page__attach">
                                            <select
                                                class="auth-form__input"
                                                prop:value=move || selected_competence.get()
                                                on:change=move |ev| {
                                                    selected_competence.set(event_target_value(&ev));
                                                }
                                            >
                                                <option value="">"Pick a competence..."</option>
                                                {options
                                                    .iter()
                                                    .map(|c| {
                                                        view! {
                                                            <option value=c.id.to_string()>{c.name.clone()}</option>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </select>
                                            <button
                                                class="btn"
                                                disabled=move || attaching.get()
                                                on:click=on_attach
                                            >
                                                "Add"
                                            </button>
                                        </div>
                                    </section>

                                    <section class="profile-page__section">
                                        <h2>"Experience"</h2>
                                        {if experiences.is_empty() {
                                            view! { <p>"No experience recorded yet."</p> }.into_any()
                                        } else {
                                            view! {
                                                <ul class="profile-page__experiences">
                                                    {experiences
                                                        .iter()
                                                        .map(|e| {
                                                            view! {
                                                                <li class="experience-item">
                                                                    <h3>{e.title.clone()}</h3>
                                                                    <p class="experience-item__dates">
                                                                        {e.start_date.clone()} " to " {e.end_date.clone()}
                                                                    </p>
                                                                    <p>{e.description.clone()}</p>
                                                                </li>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </ul>
                                            }
                                                .into_any()
                                        }}
                                    </section>
                                </div>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
