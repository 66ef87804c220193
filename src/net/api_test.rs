use super::*;

#[test]
fn endpoint_prefixes_api_base() {
    assert_eq!(endpoint("/users/login"), "/api/users/login");
    assert_eq!(endpoint("/offers/o1/applications"), "/api/offers/o1/applications");
}

#[test]
fn bearer_formats_header_value() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

#[test]
fn only_401_and_403_are_auth_failures() {
    assert!(is_auth_failure(401));
    assert!(is_auth_failure(403));
    for status in [200, 204, 400, 404, 409, 422, 500, 503] {
        assert!(!is_auth_failure(status), "{status} must pass through");
    }
}

#[test]
fn login_and_register_are_public_paths() {
    assert!(is_public_path("/login"));
    assert!(is_public_path("/register"));
    assert!(!is_public_path("/"));
    assert!(!is_public_path("/profile"));
    assert!(!is_public_path("/login/extra"));
}

#[test]
fn status_message_prefers_server_message() {
    assert_eq!(status_message(400, Some("email already taken")), "email already taken");
    assert_eq!(status_message(500, None), "request failed: 500");
}

#[test]
fn api_error_display_matches_taxonomy() {
    assert_eq!(ApiError::SessionExpired { status: 401 }.to_string(), "session expired (401)");
    assert_eq!(
        ApiError::Status { status: 404, message: status_message(404, Some("offer not found")) }
            .to_string(),
        "offer not found"
    );
    assert_eq!(
        ApiError::Status { status: 500, message: status_message(500, None) }.to_string(),
        "request failed: 500"
    );
    assert_eq!(ApiError::unavailable().to_string(), "network error: not available on server");
}

// The redirect guard is process-wide state, so every scenario that touches
// it lives in this single test to keep the assertions ordered.
#[test]
fn forced_logout_is_claimed_exactly_once() {
    reset_forced_logout();

    // Failures on public routes never claim the guard...
    assert!(!claim_forced_logout("/login"));
    assert!(!claim_forced_logout("/register"));
    // ...so the first failure elsewhere still wins.
    assert!(claim_forced_logout("/offers/o1"));
    // Later failures are suppressed, wherever they happen.
    assert!(!claim_forced_logout("/offers/o1"));
    assert!(!claim_forced_logout("/profile"));
    assert!(!claim_forced_logout("/login"));

    // Many requests failing around the same moment: exactly one redirect.
    reset_forced_logout();
    let wins: Vec<bool> = std::thread::scope(|scope| {
        let handles: Vec<_> =
            (0..16).map(|_| scope.spawn(|| claim_forced_logout("/applications"))).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(wins.iter().filter(|win| **win).count(), 1);

    reset_forced_logout();
}
