use formloom_types::{ElementId, FormId, SubmissionId};
use std::collections::HashSet;
use std::str::FromStr;

// ── ElementId ─────────────────────────────────────────────────────

#[test]
fn element_id_new_is_unique() {
    let a = ElementId::new();
    let b = ElementId::new();
    assert_ne!(a, b);
}

#[test]
fn element_id_from_uuid_roundtrip() {
    let uuid = uuid::Uuid::new_v4();
    let id = ElementId::from_uuid(uuid);
    assert_eq!(id.as_uuid(), uuid);
}

#[test]
fn element_id_display_and_parse() {
    let id = ElementId::new();
    let s = id.to_string();
    let parsed = ElementId::parse(&s).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn element_id_from_str() {
    let id = ElementId::new();
    let parsed = ElementId::from_str(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn element_id_parse_invalid() {
    assert!(ElementId::parse("not-a-uuid").is_err());
    assert!(ElementId::from_str("garbage").is_err());
}

#[test]
fn element_id_hash_and_eq() {
    let id = ElementId::new();
    let mut set = HashSet::new();
    set.insert(id);
    set.insert(id); // duplicate
    assert_eq!(set.len(), 1);
}

#[test]
fn element_id_serialization_roundtrip() {
    let id = ElementId::new();
    let json = serde_json::to_string(&id).unwrap();
    let parsed: ElementId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn element_id_serializes_as_bare_string() {
    let id = ElementId::new();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{id}\""));
}

// ── FormId / SubmissionId ─────────────────────────────────────────

#[test]
fn form_id_new_is_unique() {
    assert_ne!(FormId::new(), FormId::new());
}

#[test]
fn form_id_display_and_parse() {
    let id = FormId::new();
    let parsed = FormId::parse(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn form_id_serialization_roundtrip() {
    let id = FormId::new();
    let json = serde_json::to_string(&id).unwrap();
    let parsed: FormId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn submission_id_display_and_parse() {
    let id = SubmissionId::new();
    let parsed = SubmissionId::from_str(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn submission_id_parse_invalid() {
    assert!(SubmissionId::parse("nope").is_err());
}
