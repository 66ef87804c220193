use super::*;

const LONG_DESCRIPTION: &str =
    "We are looking for an engineer to build and operate our core services.";

#[test]
fn accepts_a_complete_form_and_trims_fields() {
    let offer = validate_offer_form(
        "  Rust Engineer  ",
        LONG_DESCRIPTION,
        " 50k ",
        " Lyon ",
        " CDI ",
    )
    .unwrap();
    assert_eq!(offer.title, "Rust Engineer");
    assert_eq!(offer.salary, "50k");
    assert_eq!(offer.localisation, "Lyon");
    assert_eq!(offer.contract, "CDI");
}

#[test]
fn rejects_short_title_and_description() {
    assert_eq!(
        validate_offer_form("Dev", LONG_DESCRIPTION, "50k", "Lyon", "CDI"),
        Err("The title must contain at least 5 characters.")
    );
    assert_eq!(
        validate_offer_form("Rust Engineer", "too short", "50k", "Lyon", "CDI"),
        Err("The description must contain at least 50 characters.")
    );
}

#[test]
fn rejects_missing_required_fields() {
    assert!(validate_offer_form("Rust Engineer", LONG_DESCRIPTION, " ", "Lyon", "CDI").is_err());
    assert!(validate_offer_form("Rust Engineer", LONG_DESCRIPTION, "50k", "", "CDI").is_err());
    assert!(validate_offer_form("Rust Engineer", LONG_DESCRIPTION, "50k", "Lyon", " ").is_err());
}

#[test]
fn split_csv_trims_and_drops_empty_items() {
    assert_eq!(split_csv("rust, sql , , docker"), vec!["rust", "sql", "docker"]);
    assert!(split_csv("").is_empty());
    assert!(split_csv(" , ,").is_empty());
}
