use super::*;
use crate::net::types::{Role, User};
use crate::util::session_store::SessionRecord;

fn sample_user() -> User {
    User {
        id: "u1".to_owned(),
        name: "Lea".to_owned(),
        email: "lea@example.com".to_owned(),
        role: Role::Student,
    }
}

#[test]
fn guard_requires_both_user_and_token() {
    let mut state = AuthState::default();
    assert!(!guard_allows(&state));

    state.restore(SessionRecord { user: Some(sample_user()), token: None });
    assert!(!guard_allows(&state));

    state.restore(SessionRecord { user: None, token: Some("tok".to_owned()) });
    assert!(!guard_allows(&state));

    state.restore(SessionRecord { user: Some(sample_user()), token: Some("tok".to_owned()) });
    assert!(guard_allows(&state));
}

#[test]
fn redirect_preserves_origin_as_query() {
    assert_eq!(login_redirect_path("/offers/o1"), "/login?from=/offers/o1");
    assert_eq!(login_redirect_path("/applications"), "/login?from=/applications");
}

#[test]
fn redirect_drops_trivial_origins() {
    assert_eq!(login_redirect_path("/"), "/login");
    assert_eq!(login_redirect_path(""), "/login");
}
