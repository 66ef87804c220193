use super::*;

fn comp(id: i64, name: &str) -> Competence {
    Competence { id, name: name.to_owned() }
}

#[test]
fn owner_matches_on_name_or_email_case_insensitively() {
    let cv = "LEA DUPONT\nlea.dupont@example.com\nRust developer";
    assert!(mentions_owner(cv, "Lea Dupont", "other@example.com"));
    assert!(mentions_owner(cv, "Someone Else", "Lea.Dupont@Example.com"));
    assert!(!mentions_owner(cv, "Marc Petit", "marc@example.com"));
}

#[test]
fn owner_check_ignores_empty_identity_fields() {
    // An empty name must not trivially match every CV.
    assert!(!mentions_owner("any text", "", ""));
    assert!(mentions_owner("reach me at a@b.com", "", "a@b.com"));
}

#[test]
fn suggestions_match_cv_text_and_skip_owned() {
    let catalogue = vec![comp(1, "Rust"), comp(2, "Python"), comp(3, "Kubernetes")];
    let owned = vec![comp(2, "Python")];
    let cv = "Experienced in rust and python services.";

    let suggested = suggest_competences(cv, &catalogue, &owned);
    assert_eq!(suggested, vec![comp(1, "Rust")]);
}

#[test]
fn empty_cv_yields_no_suggestions() {
    let catalogue = vec![comp(1, "Rust")];
    assert!(suggest_competences("", &catalogue, &[]).is_empty());
}

#[test]
fn suggestions_preserve_catalogue_order() {
    let catalogue = vec![comp(5, "Go"), comp(1, "Rust"), comp(9, "SQL")];
    let cv = "sql, rust, go";
    let names: Vec<_> =
        suggest_competences(cv, &catalogue, &[]).into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Go", "Rust", "SQL"]);
}
