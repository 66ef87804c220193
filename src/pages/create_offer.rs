//! Offer creation page for recruiters, with optional AI-assisted
//! description generation.

#[cfg(test)]
#[path = "create_offer_test.rs"]
mod create_offer_test;

use leptos::prelude::*;

use crate::net::types::NewOffer;
use crate::state::toasts::{self, ToastState};

/// Company label sent to the description generator; the backend fills in
/// the recruiter's real organisation when it has one on file.
const COMPANY_PLACEHOLDER: &str = "Your company";

fn validate_offer_form(
    title: &str,
    description: &str,
    salary: &str,
    localisation: &str,
    contract: &str,
) -> Result<NewOffer, &'static str> {
    let title = title.trim();
    if title.chars().count() < 5 {
        return Err("The title must contain at least 5 characters.");
    }
    let description = description.trim();
    if description.chars().count() < 50 {
        return Err("The description must contain at least 50 characters.");
    }
    let salary = salary.trim();
    if salary.is_empty() {
        return Err("Salary is required.");
    }
    let localisation = localisation.trim();
    if localisation.chars().count() < 2 {
        return Err("Location is required.");
    }
    let contract = contract.trim();
    if contract.is_empty() {
        return Err("Contract type is required.");
    }
    Ok(NewOffer {
        title: title.to_owned(),
        description: description.to_owned(),
        salary: salary.to_owned(),
        localisation: localisation.to_owned(),
        contract: contract.to_owned(),
    })
}

/// Split a comma-separated input into trimmed, non-empty items.
fn split_csv(input: &str) -> Vec<String> {
    input.split(',').map(str::trim).filter(|item| !item.is_empty()).map(str::to_owned).collect()
}

#[component]
pub fn CreateOfferPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let salary = RwSignal::new(String::new());
    let localisation = RwSignal::new(String::new());
    let contract = RwSignal::new(String::new());
    let requirements = RwSignal::new(String::new());
    let skills = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let ai_busy = RwSignal::new(false);

    let on_generate = move |_| {
        if ai_busy.get() {
            return;
        }
        let title_value = title.get().trim().to_owned();
        let requirement_list = split_csv(&requirements.get());
        let skill_list = split_csv(&skills.get());
        if title_value.is_empty() || requirement_list.is_empty() || skill_list.is_empty() {
            toasts::show_error(
                toasts,
                "Missing information",
                "Fill in the title, requirements, and skills first",
            );
            return;
        }
        ai_busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_ai::generate_job_description(
                &title_value,
                COMPANY_PLACEHOLDER,
                &requirement_list,
                &skill_list,
            )
            .await
            {
                Ok(completion) => {
                    description.set(completion.content);
                    toasts::show_success(toasts, "Description generated");
                }
                Err(err) => toasts::show_error(toasts, "Generation failed", err.to_string()),
            }
            ai_busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (title_value, requirement_list, skill_list);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let offer = match validate_offer_form(
            &title.get(),
            &description.get(),
            &salary.get(),
            &localisation.get(),
            &contract.get(),
        ) {
            Ok(offer) => offer,
            Err(message) => {
                toasts::show_error(toasts, "Invalid offer", message);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api_offers::create(&offer).await {
                    Ok(_) => {
                        toasts::show_success(toasts, "Offer published");
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/");
                        }
                    }
                    Err(err) => {
                        toasts::show_error(toasts, "Could not publish the offer", err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = offer;
        }
    };

    view! {
        <div class="create-offer-page">
            <h1>"New offer"</h1>
            <form class="create-offer-form" on:submit=on_submit>
                <label class="auth-form__label">
                    "Title"
                    <input
                        class="auth-form__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>

                <fieldset class="create-offer-form__ai">
                    <legend>"AI assist"</legend>
                    <label class="auth-form__label">
                        "Requirements (comma-separated)"
                        <input
                            class="auth-form__input"
                            type="text"
                            prop:value=move || requirements.get()
                            on:input=move |ev| requirements.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Skills (comma-separated)"
                        <input
                            class="auth-form__input"
                            type="text"
                            prop:value=move || skills.get()
                            on:input=move |ev| skills.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn" type="button" disabled=move || ai_busy.get() on:click=on_generate>
                        {move || if ai_busy.get() { "Generating..." } else { "Generate description" }}
                    </button>
                </fieldset>

                <label class="auth-form__label">
                    "Description"
                    <textarea
                        class="auth-form__input create-offer-form__description"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="auth-form__label">
                    "Salary"
                    <input
                        class="auth-form__input"
                        type="text"
                        prop:value=move || salary.get()
                        on:input=move |ev| salary.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Location"
                    <input
                        class="auth-form__input"
                        type="text"
                        prop:value=move || localisation.get()
                        on:input=move |ev| localisation.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Contract type"
                    <input
                        class="auth-form__input"
                        type="text"
                        placeholder="CDI, CDD, freelance..."
                        prop:value=move || contract.get()
                        on:input=move |ev| contract.set(event_target_value(&ev))
                    />
                </label>

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Publishing..." } else { "Publish the offer" }}
                </button>
            </form>
        </div>
    }
}
