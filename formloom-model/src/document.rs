//! The ordered element sequence of one form.
//!
//! Insertion order is rendering and tab order. All index math in the
//! designer (drop-zone resolution, move adjustment) is computed against the
//! positions reported here, so lookups always reflect the current sequence;
//! nothing caches an index across a mutation.

use crate::{FieldInstance, ModelError, ModelResult};
use formloom_types::ElementId;
use serde::{Deserialize, Serialize};

/// An ordered sequence of field instances.
///
/// Invariants: element ids are unique within the sequence, and removing or
/// inserting never changes the id of untouched elements. Callers inserting
/// directly are responsible for supplying fresh ids; the designer session
/// always does.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    elements: Vec<FieldInstance>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document from an element sequence.
    #[must_use]
    pub fn from_elements(elements: Vec<FieldInstance>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<_> = elements.iter().map(|e| e.id).collect();
                ids.sort();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "duplicate element id in document"
        );
        Self { elements }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the document has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at a position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&FieldInstance> {
        self.elements.get(index)
    }

    /// Returns the element with the given id.
    #[must_use]
    pub fn get_by_id(&self, id: ElementId) -> Option<&FieldInstance> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Returns the current position of the element with the given id.
    ///
    /// Recomputed on every call; positions are never cached across
    /// mutations.
    #[must_use]
    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    /// Returns true if an element with this id exists.
    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.index_of(id).is_some()
    }

    /// Iterates the elements in document order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldInstance> {
        self.elements.iter()
    }

    /// Returns the id sequence in document order.
    #[must_use]
    pub fn ids(&self) -> Vec<ElementId> {
        self.elements.iter().map(|e| e.id).collect()
    }

    /// Inserts an instance at a position, shifting later elements right.
    ///
    /// The index is clamped to `[0, len]`; `len` appends. The instance's id
    /// must not already be present.
    pub fn insert_at(&mut self, index: usize, instance: FieldInstance) {
        debug_assert!(
            !self.contains(instance.id),
            "duplicate element id in document"
        );
        let index = index.min(self.elements.len());
        self.elements.insert(index, instance);
    }

    /// Replaces the element with the given id in place, position unchanged.
    ///
    /// The replacement must carry the same id: update-by-id never renames an
    /// element, so a mismatch is rejected rather than applied.
    pub fn replace(&mut self, id: ElementId, instance: FieldInstance) -> ModelResult<()> {
        let index = self
            .index_of(id)
            .ok_or(ModelError::ElementNotFound(id))?;
        if instance.id != id {
            return Err(ModelError::IdMismatch {
                expected: id,
                got: instance.id,
            });
        }
        self.elements[index] = instance;
        Ok(())
    }

    /// Removes the element with the given id, shifting later elements left.
    ///
    /// Returns the removed instance.
    pub fn remove_by_id(&mut self, id: ElementId) -> ModelResult<FieldInstance> {
        let index = self
            .index_of(id)
            .ok_or(ModelError::ElementNotFound(id))?;
        Ok(self.elements.remove(index))
    }

    /// Serializes the document to the persisted wire format: a JSON array of
    /// `{id, type, extraAttributes}` objects in document order.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.elements)
    }

    /// Parses a document back from the persisted wire format.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        let elements: Vec<FieldInstance> = serde_json::from_str(content)?;
        Ok(Self::from_elements(elements))
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a FieldInstance;
    type IntoIter = std::slice::Iter<'a, FieldInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
