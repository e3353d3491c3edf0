use formloom_types::{ElementId, FieldKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One placed field element in a form document.
///
/// The `extra_attributes` field holds arbitrary JSON whose structure is
/// defined by the field type's registry entry. Presentational kinds with no
/// configurable attributes carry `null`, which the wire format omits.
///
/// Serializes as `{"id": ..., "type": ..., "extraAttributes": ...}`, the
/// persistence contract for stored form content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldInstance {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(
        default,
        rename = "extraAttributes",
        skip_serializing_if = "Value::is_null"
    )]
    pub extra_attributes: Value,
}

impl FieldInstance {
    /// Creates an instance with the given attribute map.
    #[must_use]
    pub fn new(id: ElementId, kind: FieldKind, extra_attributes: Value) -> Self {
        Self {
            id,
            kind,
            extra_attributes,
        }
    }

    /// Replaces the attribute map wholesale, keeping id and kind.
    #[must_use]
    pub fn with_attributes(mut self, extra_attributes: Value) -> Self {
        self.extra_attributes = extra_attributes;
        self
    }

    /// Extract a string attribute using a JSON pointer (e.g., "/label").
    pub fn get_str(&self, pointer: &str) -> Option<&str> {
        self.extra_attributes.pointer(pointer).and_then(|v| v.as_str())
    }

    /// Extract a boolean attribute using a JSON pointer.
    pub fn get_bool(&self, pointer: &str) -> Option<bool> {
        self.extra_attributes.pointer(pointer).and_then(|v| v.as_bool())
    }

    /// Extract a numeric attribute using a JSON pointer.
    pub fn get_number(&self, pointer: &str) -> Option<f64> {
        self.extra_attributes.pointer(pointer).and_then(|v| v.as_f64())
    }

    /// Whether the element is marked required. Kinds without the concept
    /// (and instances without the key) read as not required.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.get_bool("/required").unwrap_or(false)
    }
}
