//! Offer summary card for the dashboard grid.

#[cfg(test)]
#[path = "offer_card_test.rs"]
mod offer_card_test;

use leptos::prelude::*;

use crate::net::types::Offer;

/// Badge tier for a matching score, mirroring the thresholds used across
/// the product: 70+ is a strong match, 50+ a partial one.
fn match_tier(score: u8) -> &'static str {
    if score >= 70 {
        "high"
    } else if score >= 50 {
        "mid"
    } else {
        "low"
    }
}

/// How many missing competences to list before collapsing into a "+N".
const MISSING_PREVIEW: usize = 3;

#[component]
pub fn OfferCard(
    offer: Offer,
    /// Render the matching-score block (student dashboards).
    #[prop(default = false)]
    show_matching: bool,
    /// Render the received-applications shortcut (recruiter dashboards).
    #[prop(default = false)]
    show_applications: bool,
) -> impl IntoView {
    let offer_href = format!("/offers/{}", offer.id);
    let applications_href = format!("/offers/{}/applications", offer.id);

    let score_badge = show_matching.then(|| {
        offer.matching_score.map(|score| {
            let class = format!("badge badge--match-{}", match_tier(score));
            view! { <span class=class>{format!("{score}%")}</span> }
        })
    });

    let matching_block = (show_matching && offer.matching_score.is_some_and(|s| s < 100)).then(|| {
        let matching = offer.matching_competences.clone();
        let missing = offer.missing_competences.clone();
        let hidden = missing.len().saturating_sub(MISSING_PREVIEW);
        let matching_label = (!matching.is_empty())
            .then(|| view! { <p class="offer-card__matching-label">"Matching competences"</p> });
        let missing_label = (!missing.is_empty())
            .then(|| view! { <p class="offer-card__matching-label">"Missing competences"</p> });
        let overflow =
            (hidden > 0).then(|| view! { <span class="badge badge--outline">{format!("+{hidden}")}</span> });
        view! {
            <div class="offer-card__matching">
                {matching_label}
                <div class="offer-card__badges">
                    {matching
                        .iter()
                        .map(|c| view! { <span class="badge badge--secondary">{c.name.clone()}</span> })
                        .collect::<Vec<_>>()}
                </div>
                {missing_label}
                <div class="offer-card__badges">
                    {missing
                        .iter()
                        .take(MISSING_PREVIEW)
                        .map(|c| view! { <span class="badge badge--outline">{c.name.clone()}</span> })
                        .collect::<Vec<_>>()}
                    {overflow}
                </div>
            </div>
        }
    });

    view! {
        <article class="offer-card">
            <div class="offer-card__head">
                <h3 class="offer-card__title">{offer.title.clone()}</h3>
                {score_badge}
            </div>
            {matching_block}
            <p class="offer-card__description">{offer.description.clone()}</p>
            <div class="offer-card__badges">
                <span class="badge badge--outline">{offer.localisation.clone()}</span>
                <span class="badge badge--outline">{offer.salary.clone()}</span>
                <span class="badge badge--secondary">{offer.contract.clone()}</span>
            </div>
            {offer
                .author
                .as_ref()
                .map(|author| {
                    view! {
                        <p class="offer-card__author">"Published by " {author.name.clone()}</p>
                    }
                })}
            <div class="offer-card__actions">
                <a class="btn btn--primary" href=offer_href>
                    "View offer"
                </a>
                {show_applications
                    .then(|| {
                        view! {
                            <a class="btn" href=applications_href>
                                "Applications"
                            </a>
                        }
                    })}
            </div>
        </article>
    }
}
