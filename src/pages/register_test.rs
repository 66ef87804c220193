use super::*;

#[test]
fn accepts_valid_input_and_trims() {
    let input = validate_registration_input("  Lea  ", " lea@example.com ", "secret1").unwrap();
    assert_eq!(input.name, "Lea");
    assert_eq!(input.email, "lea@example.com");
    assert_eq!(input.password, "secret1");
}

#[test]
fn rejects_short_name() {
    assert_eq!(validate_registration_input("L", "lea@example.com", "secret1"), Err("Name is too short."));
    assert_eq!(validate_registration_input("  ", "lea@example.com", "secret1"), Err("Name is too short."));
}

#[test]
fn rejects_bad_email() {
    assert!(validate_registration_input("Lea", "nope", "secret1").is_err());
}

#[test]
fn rejects_short_password() {
    assert!(validate_registration_input("Lea", "lea@example.com", "12345").is_err());
}
