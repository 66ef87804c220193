//! Small aggregate-figure card for dashboards.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Card heading, e.g. `"Open offers"`.
    title: &'static str,
    /// Pre-formatted figure.
    value: String,
    /// Optional secondary line under the figure.
    #[prop(optional)]
    hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-card__title">{title}</p>
            <p class="stat-card__value">{value}</p>
            {hint.map(|hint| view! { <p class="stat-card__hint">{hint}</p> })}
        </div>
    }
}
