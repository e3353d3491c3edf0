use formloom_model::FieldInstance;
use formloom_types::{ElementId, FieldKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Submission-time validator: attributes + raw value in, verdict out.
///
/// A plain function pointer so descriptors stay `Copy`-cheap and the catalog
/// can be assembled without allocation per lookup.
pub type Validator = fn(&FieldInstance, &str) -> bool;

/// Property-edit checker: inspects a prospective attribute map and reports
/// attribute-level problems. An empty list means the attributes are
/// acceptable for this type.
pub type AttributeChecker = fn(&Value) -> Vec<AttributeProblem>;

/// One problem found in a prospective attribute map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeProblem {
    /// JSON pointer of the offending attribute (e.g., "/label").
    pub path: String,
    pub message: String,
}

impl AttributeProblem {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Palette metadata for the designer sidebar button of a field type.
///
/// Opaque to the core: `icon` is a renderer-defined token, never interpreted
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub label: String,
    pub icon: String,
}

impl PaletteEntry {
    pub fn new(label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: icon.into(),
        }
    }
}

/// The behavior bundle for one registered field type.
#[derive(Debug, Clone)]
pub struct FieldTypeDescriptor {
    kind: FieldKind,
    palette: PaletteEntry,
    default_attributes: Value,
    validator: Validator,
    attribute_checker: AttributeChecker,
}

impl FieldTypeDescriptor {
    /// Creates a descriptor for an input-carrying type: its validator
    /// applies the universal rule "required and empty means invalid".
    #[must_use]
    pub fn input(
        kind: impl Into<FieldKind>,
        palette: PaletteEntry,
        default_attributes: Value,
        attribute_checker: AttributeChecker,
    ) -> Self {
        Self {
            kind: kind.into(),
            palette,
            default_attributes,
            validator: required_rule,
            attribute_checker,
        }
    }

    /// Creates a descriptor for a structural/presentational type: it carries
    /// no submitted value and always validates.
    #[must_use]
    pub fn structural(
        kind: impl Into<FieldKind>,
        palette: PaletteEntry,
        default_attributes: Value,
        attribute_checker: AttributeChecker,
    ) -> Self {
        Self {
            kind: kind.into(),
            palette,
            default_attributes,
            validator: always_valid,
            attribute_checker,
        }
    }

    /// Creates a descriptor with a custom validator.
    #[must_use]
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    /// The type tag this descriptor is registered under.
    #[must_use]
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Palette metadata for the designer sidebar.
    #[must_use]
    pub fn palette(&self) -> &PaletteEntry {
        &self.palette
    }

    /// The default attribute map for freshly constructed instances.
    #[must_use]
    pub fn default_attributes(&self) -> &Value {
        &self.default_attributes
    }

    /// Constructs a fresh instance with this type's default attributes and
    /// the given identifier. Pure: same inputs, same instance. Id
    /// generation is the caller's responsibility.
    #[must_use]
    pub fn construct(&self, id: ElementId) -> FieldInstance {
        FieldInstance::new(id, self.kind.clone(), self.default_attributes.clone())
    }

    /// Validates a submitted raw value against an instance of this type.
    #[must_use]
    pub fn validate(&self, instance: &FieldInstance, raw_value: &str) -> bool {
        (self.validator)(instance, raw_value)
    }

    /// Checks a prospective attribute map for property-edit problems.
    #[must_use]
    pub fn check_attributes(&self, attributes: &Value) -> Vec<AttributeProblem> {
        (self.attribute_checker)(attributes)
    }
}

/// The universal validator for input types.
fn required_rule(instance: &FieldInstance, raw_value: &str) -> bool {
    !(instance.is_required() && raw_value.is_empty())
}

/// The validator for structural types.
fn always_valid(_instance: &FieldInstance, _raw_value: &str) -> bool {
    true
}
