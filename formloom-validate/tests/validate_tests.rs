use formloom_model::{Document, FieldInstance};
use formloom_registry::{kinds, FieldTypeRegistry};
use formloom_types::{ElementId, FieldKind};
use formloom_validate::{validate_all, ErrorSet, SubmissionValues};
use pretty_assertions::assert_eq;
use serde_json::json;

fn required_text(id: ElementId) -> FieldInstance {
    FieldInstance::new(
        id,
        FieldKind::new(kinds::TEXT_FIELD),
        json!({
            "label": "Text field",
            "helperText": "Helper text",
            "required": true,
            "placeholder": "Value here",
        }),
    )
}

fn registry() -> FieldTypeRegistry {
    FieldTypeRegistry::builtin()
}

// ── validate_all ──────────────────────────────────────────────────

#[test]
fn empty_document_is_valid() {
    let errors = validate_all(&registry(), &Document::new(), &SubmissionValues::new()).unwrap();
    assert!(errors.is_valid());
}

#[test]
fn required_field_without_value_fails() {
    let id = ElementId::new();
    let mut doc = Document::new();
    doc.insert_at(0, required_text(id));

    let errors = validate_all(&registry(), &doc, &SubmissionValues::new()).unwrap();
    assert_eq!(errors, ErrorSet::from_iter([id]));
}

#[test]
fn required_field_with_value_passes() {
    let id = ElementId::new();
    let mut doc = Document::new();
    doc.insert_at(0, required_text(id));

    let mut values = SubmissionValues::new();
    values.set(id, "Ada Lovelace");

    let errors = validate_all(&registry(), &doc, &values).unwrap();
    assert!(errors.is_valid());
}

#[test]
fn empty_string_counts_as_missing() {
    let id = ElementId::new();
    let mut doc = Document::new();
    doc.insert_at(0, required_text(id));

    let mut values = SubmissionValues::new();
    values.set(id, "");

    let errors = validate_all(&registry(), &doc, &values).unwrap();
    assert!(errors.contains(id));
}

#[test]
fn all_failures_are_collected_not_just_the_first() {
    let registry = registry();
    let mut doc = Document::new();
    let a = ElementId::new();
    let b = ElementId::new();
    let c = ElementId::new();
    doc.insert_at(0, required_text(a));
    // a passing optional field in the middle
    doc.insert_at(
        1,
        registry
            .construct(&FieldKind::new(kinds::TEXT_FIELD), c)
            .unwrap(),
    );
    doc.insert_at(2, required_text(b));

    let errors = validate_all(&registry, &doc, &SubmissionValues::new()).unwrap();
    assert_eq!(errors.len(), 2);
    assert!(errors.contains(a));
    assert!(errors.contains(b));
    assert!(!errors.contains(c));
}

#[test]
fn structural_elements_never_fail() {
    let registry = registry();
    let mut doc = Document::new();
    for (i, tag) in [
        kinds::TITLE_FIELD,
        kinds::SUBTITLE_FIELD,
        kinds::PARAGRAPH_FIELD,
        kinds::SEPARATOR_FIELD,
        kinds::SPACER_FIELD,
    ]
    .iter()
    .enumerate()
    {
        doc.insert_at(
            i,
            registry
                .construct(&FieldKind::new(*tag), ElementId::new())
                .unwrap(),
        );
    }

    let errors = validate_all(&registry, &doc, &SubmissionValues::new()).unwrap();
    assert!(errors.is_valid());
}

#[test]
fn unknown_type_is_raised_not_collected() {
    let mut doc = Document::new();
    doc.insert_at(
        0,
        FieldInstance::new(ElementId::new(), FieldKind::new("HologramField"), json!({})),
    );
    assert!(validate_all(&registry(), &doc, &SubmissionValues::new()).is_err());
}

// ── SubmissionValues wire format ──────────────────────────────────

#[test]
fn values_serialize_as_json_object() {
    let id = ElementId::new();
    let mut values = SubmissionValues::new();
    values.set(id, "hello");

    let json = values.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[id.to_string()], json!("hello"));
}

#[test]
fn values_roundtrip() {
    let mut values = SubmissionValues::new();
    values.set(ElementId::new(), "a");
    values.set(ElementId::new(), "b");

    let parsed = SubmissionValues::from_json(&values.to_json().unwrap()).unwrap();
    assert_eq!(parsed, values);
}

#[test]
fn absent_key_reads_as_none() {
    let values = SubmissionValues::new();
    assert_eq!(values.get(ElementId::new()), None);
}

// ── ErrorSet ──────────────────────────────────────────────────────

#[test]
fn error_set_serializes_as_id_array() {
    let id = ElementId::new();
    let errors = ErrorSet::from_iter([id]);
    let json = serde_json::to_string(&errors).unwrap();
    assert_eq!(json, format!("[\"{id}\"]"));
}

#[test]
fn error_set_dedupes() {
    let id = ElementId::new();
    let errors = ErrorSet::from_iter([id, id]);
    assert_eq!(errors.len(), 1);
}
