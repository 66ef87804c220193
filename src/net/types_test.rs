use super::*;

#[test]
fn offer_decodes_pascal_case_associations() {
    let raw = r#"{
        "id": "o1",
        "title": "Rust engineer",
        "description": "Build things",
        "salary": "50k",
        "localisation": "Lyon",
        "contract": "CDI",
        "createdAt": "2025-01-10T08:00:00Z",
        "Competences": [{"id": 3, "name": "Rust"}],
        "User": {"name": "Acme"}
    }"#;
    let offer: Offer = serde_json::from_str(raw).unwrap();
    assert_eq!(offer.competences, vec![Competence { id: 3, name: "Rust".to_owned() }]);
    assert_eq!(offer.author.as_ref().map(|a| a.name.as_str()), Some("Acme"));
    assert_eq!(offer.matching_score, None);
    assert!(offer.matching_competences.is_empty());
}

#[test]
fn matching_offer_decodes_score_fields() {
    let raw = r#"{
        "id": "o2",
        "title": "Backend dev",
        "description": "APIs",
        "salary": "45k",
        "localisation": "Paris",
        "contract": "CDD",
        "createdAt": "2025-02-01T00:00:00Z",
        "matchingScore": 72,
        "matchingCompetences": [{"id": 1, "name": "SQL"}],
        "missingCompetences": [{"id": 2, "name": "Go"}]
    }"#;
    let offer: Offer = serde_json::from_str(raw).unwrap();
    assert_eq!(offer.matching_score, Some(72));
    assert_eq!(offer.matching_competences.len(), 1);
    assert_eq!(offer.missing_competences.len(), 1);
}

#[test]
fn role_round_trips_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Entreprise).unwrap(), "\"entreprise\"");
    let role: Role = serde_json::from_str("\"student\"").unwrap();
    assert_eq!(role, Role::Student);
}

#[test]
fn application_status_wire_and_labels_agree() {
    for status in ApplicationStatus::ALL {
        let encoded = serde_json::to_string(&status).unwrap();
        assert_eq!(encoded, format!("\"{}\"", status.as_str()));
    }
    assert_eq!(ApplicationStatus::Reviewed.label(), "Under review");
}

#[test]
fn application_decodes_with_offer_id_rename() {
    let raw = r#"{
        "id": "a1",
        "status": "pending",
        "OfferId": "o1",
        "createdAt": "2025-03-01T00:00:00Z"
    }"#;
    let app: Application = serde_json::from_str(raw).unwrap();
    assert_eq!(app.offer_id, "o1");
    assert_eq!(app.status, ApplicationStatus::Pending);
    assert_eq!(app.updated_at, None);
    assert!(app.offer.is_none());
}

#[test]
fn user_profile_accepts_backend_adress_spelling() {
    let raw = r#"{
        "id": "u1",
        "name": "Lea",
        "email": "lea@example.com",
        "role": "student",
        "adress": "12 rue des Lilas"
    }"#;
    let profile: UserProfile = serde_json::from_str(raw).unwrap();
    assert_eq!(profile.address.as_deref(), Some("12 rue des Lilas"));
    assert!(profile.competences.is_empty());
    assert_eq!(profile.as_user().name, "Lea");
}

#[test]
fn envelope_unwraps_data_field() {
    let raw = r#"{"data": {"user": {"id": "u1", "name": "Lea", "email": "l@e.com", "role": "admin"}, "token": "t"}}"#;
    let env: Envelope<LoginPayload> = serde_json::from_str(raw).unwrap();
    assert_eq!(env.data.token, "t");
    assert_eq!(env.data.user.role, Role::Admin);
}

#[test]
fn chat_message_serializes_lowercase_role() {
    let msg = ChatMessage { role: ChatRole::Assistant, content: "hi".to_owned() };
    let raw = serde_json::to_string(&msg).unwrap();
    assert!(raw.contains("\"assistant\""));
}
