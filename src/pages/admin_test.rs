use super::*;

fn user(id: &str, role: Role) -> User {
    User { id: id.to_owned(), name: id.to_owned(), email: format!("{id}@example.com"), role }
}

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
fn stats_count_users_by_role() {
    let users = vec![
        user("a", Role::Student),
        user("b", Role::Student),
        user("c", Role::Entreprise),
        user("d", Role::Admin),
    ];
    let stats = compute_stats(&users, &[], &[]);
    assert_eq!(stats.students, 2);
    assert_eq!(stats.recruiters, 1);
    assert_eq!(stats.admins, 1);
}

#[test]
fn stats_count_applications_by_status() {
    let applications = vec![
        application("a1", ApplicationStatus::Pending),
        application("a2", ApplicationStatus::Pending),
        application("a3", ApplicationStatus::Accepted),
        application("a4", ApplicationStatus::Rejected),
    ];
    let stats = compute_stats(&[], &[], &applications);
    assert_eq!(stats.applications, 4);
    assert_eq!(stats.pending, 2);
    assert_eq!(stats.accepted, 1);
}

#[test]
fn stats_on_empty_inputs_are_zero() {
    assert_eq!(compute_stats(&[], &[], &[]), AdminStats::default());
}
