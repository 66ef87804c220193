use super::*;

#[test]
fn validate_login_input_trims_and_accepts() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "secret1"),
        Ok(("user@example.com".to_owned(), "secret1".to_owned()))
    );
}

#[test]
fn validate_login_input_rejects_bad_email() {
    assert!(validate_login_input("", "secret1").is_err());
    assert!(validate_login_input("   ", "secret1").is_err());
    assert!(validate_login_input("not-an-email", "secret1").is_err());
}

#[test]
fn validate_login_input_rejects_short_password() {
    assert_eq!(
        validate_login_input("user@example.com", "12345"),
        Err("Password must be at least 6 characters.")
    );
}

#[test]
fn post_login_target_honors_guarded_origin() {
    assert_eq!(post_login_target(Some("/offers/o1")), "/offers/o1");
    assert_eq!(post_login_target(Some("/applications")), "/applications");
}

#[test]
fn post_login_target_rejects_foreign_targets() {
    assert_eq!(post_login_target(None), "/");
    assert_eq!(post_login_target(Some("")), "/");
    assert_eq!(post_login_target(Some("https://evil.example")), "/");
    assert_eq!(post_login_target(Some("//evil.example")), "/");
}
