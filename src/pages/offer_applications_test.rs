use super::*;

fn application(id: &str, status: ApplicationStatus) -> Application {
    Application {
        id: id.to_owned(),
        status,
        cover_letter: None,
        offer_id: "o1".to_owned(),
        created_at: "2025-03-01T00:00:00Z".to_owned(),
        updated_at: None,
        offer: None,
        applicant: None,
    }
}

#[test]
fn apply_status_updates_only_the_target() {
    let mut items =
        vec![application("a1", ApplicationStatus::Pending), application("a2", ApplicationStatus::Pending)];
    apply_status(&mut items, "a2", ApplicationStatus::Accepted);
    assert_eq!(items[0].status, ApplicationStatus::Pending);
    assert_eq!(items[1].status, ApplicationStatus::Accepted);
}

#[test]
fn apply_status_ignores_unknown_ids() {
    let mut items = vec![application("a1", ApplicationStatus::Reviewed)];
    apply_status(&mut items, "missing", ApplicationStatus::Rejected);
    assert_eq!(items[0].status, ApplicationStatus::Reviewed);
}
