use super::*;
use crate::net::types::OfferAuthor;

fn offer(title: &str, description: &str, localisation: &str, created_at: &str, author: Option<&str>) -> Offer {
    Offer {
        id: title.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        salary: "40k".to_owned(),
        localisation: localisation.to_owned(),
        contract: "CDI".to_owned(),
        created_at: created_at.to_owned(),
        competences: Vec::new(),
        author: author.map(|name| OfferAuthor { id: None, name: name.to_owned(), email: None }),
        matching_score: None,
        matching_competences: Vec::new(),
        missing_competences: Vec::new(),
    }
}

#[test]
fn filter_matches_title_or_description_case_insensitively() {
    let offers = vec![
        offer("Rust Engineer", "systems work", "Lyon", "2025-01-01", None),
        offer("Designer", "loves rust colors", "Paris", "2025-01-02", None),
        offer("PM", "roadmaps", "Paris", "2025-01-03", None),
    ];
    let hits = filter_offers(&offers, "RUST", "");
    assert_eq!(hits.len(), 2);
}

#[test]
fn filter_combines_search_and_location() {
    let offers = vec![
        offer("Rust Engineer", "systems", "Lyon", "2025-01-01", None),
        offer("Rust Engineer", "systems", "Paris", "2025-01-02", None),
    ];
    let hits = filter_offers(&offers, "rust", "par");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].localisation, "Paris");
}

#[test]
fn empty_terms_match_everything() {
    let offers = vec![offer("A", "a", "X", "2025-01-01", None)];
    assert_eq!(filter_offers(&offers, "", "").len(), 1);
}

#[test]
fn distinct_recruiters_dedupes_by_name() {
    let offers = vec![
        offer("A", "a", "X", "2025-01-01", Some("Acme")),
        offer("B", "b", "X", "2025-01-02", Some("Acme")),
        offer("C", "c", "X", "2025-01-03", Some("Globex")),
        offer("D", "d", "X", "2025-01-04", None),
    ];
    assert_eq!(distinct_recruiters(&offers), 2);
}

#[test]
fn count_created_since_uses_lexicographic_iso_order() {
    let offers = vec![
        offer("old", "a", "X", "2025-01-01T00:00:00Z", None),
        offer("new", "b", "X", "2025-03-01T00:00:00Z", None),
    ];
    assert_eq!(count_created_since(&offers, "2025-02-01T00:00:00Z"), 1);
    assert_eq!(count_created_since(&offers, "2024-01-01T00:00:00Z"), 2);
    assert_eq!(count_created_since(&offers, "9999"), 0);
}
