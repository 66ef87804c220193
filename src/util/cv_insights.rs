//! Client-side heuristics over extracted CV text.
//!
//! Both checks are plain case-insensitive containment, matching what the
//! product does: cheap signals surfaced to the user, not NLP.

#[cfg(test)]
#[path = "cv_insights_test.rs"]
mod cv_insights_test;

use std::collections::HashSet;

use crate::net::types::Competence;

/// Whether the CV text mentions the account owner's name or email.
/// Used to warn when someone uploads a CV that is not theirs.
pub fn mentions_owner(cv_text: &str, name: &str, email: &str) -> bool {
    let lower = cv_text.to_lowercase();
    (!email.is_empty() && lower.contains(&email.to_lowercase()))
        || (!name.is_empty() && lower.contains(&name.to_lowercase()))
}

/// Catalogue competences that appear in the CV text but are not yet on
/// the profile, in catalogue order.
pub fn suggest_competences(
    cv_text: &str,
    catalogue: &[Competence],
    owned: &[Competence],
) -> Vec<Competence> {
    if cv_text.is_empty() {
        return Vec::new();
    }
    let lower = cv_text.to_lowercase();
    let owned_ids: HashSet<i64> = owned.iter().map(|c| c.id).collect();
    catalogue
        .iter()
        .filter(|c| !owned_ids.contains(&c.id) && lower.contains(&c.name.to_lowercase()))
        .cloned()
        .collect()
}
