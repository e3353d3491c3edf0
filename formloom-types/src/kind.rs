//! The field type tag.
//!
//! A `FieldKind` names a registered field type ("TextField", "SelectField",
//! ...). The set is open: the core never enumerates kinds, it only carries
//! the tag and asks the registry for behavior. Constants for the built-in
//! catalog live in `formloom-registry`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The type tag of a field element.
///
/// Opaque to the element model; resolved to a behavior bundle by the
/// field type registry. An instance whose tag has no registry entry is a
/// configuration error, not a user-facing one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldKind(String);

impl FieldKind {
    /// Creates a field kind from a type tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldKind {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl From<String> for FieldKind {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl AsRef<str> for FieldKind {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
