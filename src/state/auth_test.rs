use super::*;
use crate::net::types::Role;

fn sample_user() -> User {
    User {
        id: "u1".to_owned(),
        name: "Lea".to_owned(),
        email: "lea@example.com".to_owned(),
        role: Role::Student,
    }
}

#[test]
fn starts_anonymous_and_loading() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert!(state.loading);
    assert_eq!(state.startup_plan(), StartupPlan::StayAnonymous);
}

#[test]
fn login_then_logout_round_trips_the_state_machine() {
    let mut state = AuthState::default();
    state.loading = false;

    state.login(sample_user(), "tok".to_owned());
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("tok"));

    state.logout();
    assert!(!state.is_authenticated());
    assert_eq!(state.token, None);
    assert_eq!(state.user, None);
}

#[test]
fn logout_is_idempotent_on_anonymous_store() {
    let mut state = AuthState::default();
    state.logout();
    state.logout();
    assert!(!state.is_authenticated());
    assert_eq!(state.token, None);
}

#[test]
fn set_user_keeps_the_token() {
    let mut state = AuthState::default();
    state.login(sample_user(), "tok".to_owned());

    let mut renamed = sample_user();
    renamed.name = "Lea B.".to_owned();
    state.set_user(renamed);

    assert_eq!(state.token.as_deref(), Some("tok"));
    assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("Lea B."));
    assert!(state.is_authenticated());
}

#[test]
fn authentication_requires_both_fields() {
    let mut state = AuthState::default();
    state.restore(SessionRecord { user: None, token: Some("tok".to_owned()) });
    assert!(!state.is_authenticated());

    state.restore(SessionRecord { user: Some(sample_user()), token: None });
    assert!(!state.is_authenticated());

    state.restore(SessionRecord { user: Some(sample_user()), token: Some("tok".to_owned()) });
    assert!(state.is_authenticated());
}

#[test]
fn startup_plan_covers_all_rehydration_shapes() {
    let mut state = AuthState::default();
    assert_eq!(state.startup_plan(), StartupPlan::StayAnonymous);

    state.restore(SessionRecord { user: None, token: Some("tok".to_owned()) });
    assert_eq!(state.startup_plan(), StartupPlan::ValidateToken);

    state.restore(SessionRecord { user: Some(sample_user()), token: Some("tok".to_owned()) });
    assert_eq!(state.startup_plan(), StartupPlan::TrustRehydrated);
}
