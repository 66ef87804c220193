use super::*;

fn comp(id: i64, name: &str) -> Competence {
    Competence { id, name: name.to_owned() }
}

#[test]
fn selectable_excludes_owned_competences() {
    let catalogue = vec![comp(1, "Rust"), comp(2, "SQL"), comp(3, "Go")];
    let owned = vec![comp(2, "SQL")];
    let options = selectable_competences(&catalogue, &owned);
    assert_eq!(options, vec![comp(1, "Rust"), comp(3, "Go")]);
}

#[test]
fn selectable_with_empty_catalogue_is_empty() {
    assert!(selectable_competences(&[], &[comp(1, "Rust")]).is_empty());
}

#[test]
fn selectable_with_nothing_owned_is_the_catalogue() {
    let catalogue = vec![comp(1, "Rust")];
    assert_eq!(selectable_competences(&catalogue, &[]), catalogue);
}
