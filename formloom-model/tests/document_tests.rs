use formloom_model::{Document, FieldInstance, ModelError};
use formloom_types::{ElementId, FieldKind};
use pretty_assertions::assert_eq;
use serde_json::json;

fn element(kind: &str) -> FieldInstance {
    FieldInstance::new(ElementId::new(), FieldKind::new(kind), serde_json::Value::Null)
}

fn doc_of(n: usize) -> (Document, Vec<ElementId>) {
    let mut doc = Document::new();
    let mut ids = Vec::new();
    for i in 0..n {
        let e = element("TextField");
        ids.push(e.id);
        doc.insert_at(i, e);
    }
    (doc, ids)
}

// ── insert_at ─────────────────────────────────────────────────────

#[test]
fn new_document_is_empty() {
    let doc = Document::new();
    assert!(doc.is_empty());
    assert_eq!(doc.len(), 0);
}

#[test]
fn insert_at_end_appends() {
    let (mut doc, mut ids) = doc_of(2);
    let e = element("NumberField");
    ids.push(e.id);
    doc.insert_at(doc.len(), e);
    assert_eq!(doc.ids(), ids);
}

#[test]
fn insert_at_zero_prepends() {
    let (mut doc, ids) = doc_of(2);
    let e = element("NumberField");
    let new_id = e.id;
    doc.insert_at(0, e);
    assert_eq!(doc.ids(), vec![new_id, ids[0], ids[1]]);
}

#[test]
fn insert_in_middle_shifts_right() {
    let (mut doc, ids) = doc_of(3);
    let e = element("DateField");
    let new_id = e.id;
    doc.insert_at(1, e);
    assert_eq!(doc.ids(), vec![ids[0], new_id, ids[1], ids[2]]);
}

#[test]
fn insert_index_is_clamped() {
    let (mut doc, ids) = doc_of(2);
    let e = element("CheckboxField");
    let new_id = e.id;
    doc.insert_at(999, e);
    assert_eq!(doc.ids(), vec![ids[0], ids[1], new_id]);
}

// ── index lookups ─────────────────────────────────────────────────

#[test]
fn index_of_tracks_positions() {
    let (doc, ids) = doc_of(3);
    assert_eq!(doc.index_of(ids[0]), Some(0));
    assert_eq!(doc.index_of(ids[2]), Some(2));
    assert_eq!(doc.index_of(ElementId::new()), None);
}

#[test]
fn get_by_id_finds_element() {
    let (doc, ids) = doc_of(2);
    assert_eq!(doc.get_by_id(ids[1]).unwrap().id, ids[1]);
    assert!(doc.get_by_id(ElementId::new()).is_none());
}

// ── replace ───────────────────────────────────────────────────────

#[test]
fn replace_keeps_position() {
    let (mut doc, ids) = doc_of(3);
    let replacement = FieldInstance::new(
        ids[1],
        FieldKind::new("TextField"),
        json!({ "label": "Renamed" }),
    );
    doc.replace(ids[1], replacement).unwrap();
    assert_eq!(doc.ids(), ids);
    assert_eq!(doc.get(1).unwrap().get_str("/label"), Some("Renamed"));
}

#[test]
fn replace_unknown_id_fails() {
    let (mut doc, _) = doc_of(1);
    let missing = ElementId::new();
    let err = doc
        .replace(missing, FieldInstance::new(missing, FieldKind::new("TextField"), json!({})))
        .unwrap_err();
    assert_eq!(err, ModelError::ElementNotFound(missing));
}

#[test]
fn replace_rejects_mismatched_id() {
    let (mut doc, ids) = doc_of(2);
    let stranger = element("TextField");
    let err = doc.replace(ids[0], stranger.clone()).unwrap_err();
    assert_eq!(
        err,
        ModelError::IdMismatch {
            expected: ids[0],
            got: stranger.id,
        }
    );
    // document untouched
    assert_eq!(doc.ids(), ids);
}

// ── remove_by_id ──────────────────────────────────────────────────

#[test]
fn remove_shifts_left() {
    let (mut doc, ids) = doc_of(3);
    let removed = doc.remove_by_id(ids[1]).unwrap();
    assert_eq!(removed.id, ids[1]);
    assert_eq!(doc.ids(), vec![ids[0], ids[2]]);
}

#[test]
fn remove_unknown_id_fails() {
    let (mut doc, _) = doc_of(1);
    let missing = ElementId::new();
    assert_eq!(
        doc.remove_by_id(missing).unwrap_err(),
        ModelError::ElementNotFound(missing)
    );
}

#[test]
fn insert_then_remove_restores_id_sequence() {
    let (mut doc, ids) = doc_of(4);
    for index in 0..=doc.len() {
        let e = element("SpacerField");
        let new_id = e.id;
        doc.insert_at(index, e);
        doc.remove_by_id(new_id).unwrap();
        assert_eq!(doc.ids(), ids);
    }
}

// ── wire format ───────────────────────────────────────────────────

#[test]
fn document_serializes_as_json_array() {
    let (doc, _) = doc_of(2);
    let json = doc.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.is_array());
    assert_eq!(value.as_array().unwrap().len(), 2);
}

#[test]
fn json_roundtrip_is_lossless() {
    let mut doc = Document::new();
    doc.insert_at(
        0,
        FieldInstance::new(
            ElementId::new(),
            FieldKind::new("SelectField"),
            json!({
                "label": "Select field",
                "helperText": "Helper text",
                "required": true,
                "placeholder": "Select an option",
                "options": ["Option 1", "Option 2", "Option 3"],
            }),
        ),
    );
    doc.insert_at(1, element("SeparatorField"));

    let parsed = Document::from_json(&doc.to_json().unwrap()).unwrap();
    assert_eq!(parsed, doc);
}

#[test]
fn empty_document_roundtrips() {
    let doc = Document::new();
    assert_eq!(doc.to_json().unwrap(), "[]");
    assert_eq!(Document::from_json("[]").unwrap(), doc);
}

#[test]
fn from_json_rejects_garbage() {
    assert!(Document::from_json("not json").is_err());
    assert!(Document::from_json("{\"id\": 1}").is_err());
}
