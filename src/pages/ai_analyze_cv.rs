//! AI CV analysis page: file intake, ownership verification, competence
//! suggestions, and the analysis itself.
//!
//! SYSTEM CONTEXT
//! ==============
//! Text extraction goes through `util::file_extract` (local for TXT,
//! backend endpoint for PDF/DOCX). The ownership check and competence
//! suggestions are the pure heuristics in `util::cv_insights`, re-run
//! whenever new text lands.

use leptos::prelude::*;

use crate::net::types::Competence;
use crate::state::auth::AuthState;
use crate::state::toasts::{self, ToastState};
use crate::util::cv_insights;
use crate::util::markdown;

#[component]
pub fn AiAnalyzeCvPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let cv_text = RwSignal::new(String::new());
    let file_name = RwSignal::new(None::<String>);
    let extracting = RwSignal::new(false);
    let analyzing = RwSignal::new(false);
    let analysis = RwSignal::new(None::<String>);
    let job_description = RwSignal::new(String::new());
    let ownership_ok = RwSignal::new(true);
    let suggested = RwSignal::new(Vec::<Competence>::new());
    let catalogue = RwSignal::new(Vec::<Competence>::new());
    let owned = RwSignal::new(Vec::<Competence>::new());
    let attaching = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api_users::fetch_profile().await {
            Ok(profile) => owned.set(profile.competences),
            Err(err) => toasts::show_error(toasts, "Could not load the profile", err.to_string()),
        }
        match crate::net::api_users::list_competences().await {
            Ok(items) => catalogue.set(items),
            Err(err) => {
                toasts::show_error(toasts, "Could not load competences", err.to_string());
            }
        }
    });

    // Re-run the heuristics every time new CV text lands.
    let refresh_insights = move |text: &str| {
        let ok = match auth.get_untracked().user {
            None => true,
            Some(user) => cv_insights::mentions_owner(text, &user.name, &user.email),
        };
        ownership_ok.set(ok);
        if !ok {
            toasts::show_error(
                toasts,
                "CV verification",
                "Your name or email was not found in the CV. Check that this CV is yours.",
            );
        }
        suggested.set(cv_insights::suggest_competences(
            text,
            &catalogue.get_untracked(),
            &owned.get_untracked(),
        ));
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            if extracting.get() {
                return;
            }
            let Some(input) =
                ev.target().and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            extracting.set(true);
            file_name.set(Some(file.name()));
            leptos::task::spawn_local(async move {
                match crate::util::file_extract::extract_text(&file).await {
                    Ok(extracted) => {
                        cv_text.set(extracted.text.clone());
                        refresh_insights(&extracted.text);
                        toasts::show_success(
                            toasts,
                            format!(
                                "Text extracted from {} ({} characters)",
                                extracted.file_name, extracted.character_count,
                            ),
                        );
                    }
                    Err(message) => {
                        toasts::show_error(toasts, "Extraction failed", message);
                        file_name.set(None);
                    }
                }
                extracting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, &refresh_insights);
        }
    };

    let on_analyze = move |_| {
        if analyzing.get() {
            return;
        }
        let text = cv_text.get();
        if text.trim().is_empty() {
            toasts::show_error(toasts, "No CV text", "Upload or paste a CV first");
            return;
        }
        if !ownership_ok.get() {
            toasts::show_error(
                toasts,
                "CV verification",
                "The CV does not match your account (name/email missing).",
            );
            return;
        }
        analyzing.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let target = job_description.get_untracked();
            let target = (!target.trim().is_empty()).then_some(target);
            match crate::net::api_ai::analyze_cv(&text, target.as_deref()).await {
                Ok(completion) => {
                    analysis.set(Some(completion.content));
                    toasts::show_success(toasts, "Your CV has been analyzed");
                }
                Err(err) => toasts::show_error(toasts, "Analysis failed", err.to_string()),
            }
            analyzing.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
        }
    };

    let on_attach_suggested = move |_| {
        if attaching.get() {
            return;
        }
        let picks = suggested.get();
        if picks.is_empty() {
            return;
        }
        attaching.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let ids: Vec<i64> = picks.iter().map(|c| c.id).collect();
            match crate::net::api_users::attach_competences(&ids).await {
                Ok(()) => {
                    owned.update(|items| items.extend(picks));
                    suggested.set(Vec::new());
                    toasts::show_success(toasts, "Competences added to your profile");
                }
                Err(err) => {
                    toasts::show_error(toasts, "Could not add competences", err.to_string());
                }
            }
            attaching.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = picks;
        }
    };

    view! {
        <div class="analyze-page">
            <h1>"AI CV analysis"</h1>

            <section class="analyze-page__section">
                <h2>"1. Your CV"</h2>
                <label class="auth-form__label">
                    "Upload a PDF, DOCX, or TXT file (max 10 MB)"
                    <input
                        class="auth-form__input"
                        type="file"
                        accept=".pdf,.docx,.txt"
                        disabled=move || extracting.get()
                        on:change=on_file_change
                    />
                </label>
                <Show when=move || extracting.get()>
                    <p class="analyze-page__hint">"Extracting text..."</p>
                </Show>
                {move || {
                    file_name
                        .get()
                        .map(|name| view! { <p class="analyze-page__hint">"Loaded: " {name}</p> })
                }}
                <Show when=move || !ownership_ok.get()>
                    <p class="analyze-page__warning">
                        "This CV does not seem to match your account (name or email not found)."
                    </p>
                </Show>
                <label class="auth-form__label">
                    "Extracted text (editable)"
                    <textarea
                        class="auth-form__input analyze-page__cv-text"
                        prop:value=move || cv_text.get()
                        on:input=move |ev| cv_text.set(event_target_value(&ev))
                    ></textarea>
                </label>
            </section>

            <section class="analyze-page__section">
                <h2>"2. Target offer (optional)"</h2>
                <label class="auth-form__label">
                    "Paste a job description to score the CV against it"
                    <textarea
                        class="auth-form__input"
                        prop:value=move || job_description.get()
                        on:input=move |ev| job_description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button
                    class="btn btn--primary"
                    disabled=move || analyzing.get()
                    on:click=on_analyze
                >
                    {move || if analyzing.get() { "Analyzing..." } else { "Analyze my CV" }}
                </button>
            </section>

            {move || {
                let picks = suggested.get();
                (!picks.is_empty())
                    .then(|| {
                        view! {
                            <section class="analyze-page__section">
                                <h2>"Detected competences"</h2>
                                <p class="analyze-page__hint">
                                    "These catalogue competences appear in your CV but not on your profile yet."
                                </p>
                                <div class="offer-card__badges">
                                    {picks
                                        .iter()
                                        .map(|c| {
                                            view! {
                                                <span class="badge badge--secondary">{c.name.clone()}</span>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                                <button
                                    class="btn"
                                    disabled=move || attaching.get()
                                    on:click=on_attach_suggested
                                >
                                    "Add them to my profile"
                                </button>
                            </section>
                        }
                    })
            }}

            {move || {
                analysis
                    .get()
                    .map(|content| {
                        view! {
                            <section class="analyze-page__section analyze-page__result">
                                <h2>"Analysis"</h2>
                                <div
                                    class="analyze-page__analysis"
                                    inner_html=markdown::to_html(&content)
                                ></div>
                            </section>
                        }
                    })
            }}
        </div>
    }
}
