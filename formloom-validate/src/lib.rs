//! Submission validation engine for formloom.
//!
//! Applies each element's type-specific validator to a submitted value map
//! and collects the ids that failed. Validation never throws: a failing
//! field is an outcome for the caller to display, not an error. The only
//! error path is an element whose type tag has no registry entry, which is
//! a configuration bug and is raised as such.

mod values;

pub use values::SubmissionValues;

use formloom_model::Document;
use formloom_registry::{FieldTypeRegistry, RegistryResult};
use formloom_types::ElementId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The ids of elements whose submitted values failed validation.
///
/// Empty means the submission is valid. Always complete: every element is
/// checked, nothing short-circuits on the first failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorSet(BTreeSet<ElementId>);

impl ErrorSet {
    /// Creates an empty error set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no element failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of failing elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set is empty (alias of [`Self::is_valid`]).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if this element failed.
    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.0.contains(&id)
    }

    /// Marks an element as failed.
    pub fn insert(&mut self, id: ElementId) {
        self.0.insert(id);
    }

    /// Iterates the failing ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &ElementId> {
        self.0.iter()
    }
}

impl FromIterator<ElementId> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = ElementId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Validates every element of a document snapshot against submitted values.
///
/// Elements are checked in document order; an absent value is treated as
/// empty. Returns the complete set of failing ids, and an empty set (a
/// valid submission) for an empty document.
pub fn validate_all(
    registry: &FieldTypeRegistry,
    document: &Document,
    values: &SubmissionValues,
) -> RegistryResult<ErrorSet> {
    let mut errors = ErrorSet::new();
    for element in document.iter() {
        let value = values.get(element.id).unwrap_or_default();
        if !registry.validate(element, value)? {
            errors.insert(element.id);
        }
    }
    Ok(errors)
}
