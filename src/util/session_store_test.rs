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
fn encode_wraps_record_under_state_key() {
    let record = SessionRecord { user: Some(sample_user()), token: Some("tok".to_owned()) };
    let raw = encode(&record).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["state"]["token"], "tok");
    assert_eq!(value["state"]["user"]["email"], "lea@example.com");
}

#[test]
fn decode_round_trips_encode() {
    let record = SessionRecord { user: Some(sample_user()), token: Some("tok".to_owned()) };
    let decoded = decode(&encode(&record).unwrap()).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn decode_rejects_corrupt_value() {
    assert!(decode("not json at all").is_err());
    assert!(decode("{\"wrong\": true}").is_err());
}

#[test]
fn decode_tolerates_missing_fields() {
    let decoded = decode(r#"{"state": {}}"#).unwrap();
    assert_eq!(decoded, SessionRecord::default());

    let decoded = decode(r#"{"state": {"token": "only-token"}}"#).unwrap();
    assert_eq!(decoded.token.as_deref(), Some("only-token"));
    assert!(decoded.user.is_none());
}

#[test]
fn load_and_token_are_none_off_browser() {
    // Without the hydrate feature there is no storage to read.
    assert!(load().is_none());
    assert!(token().is_none());
}
