use formloom_types::ElementId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The raw values supplied for one form submission.
///
/// A mapping from element id to submitted string; an absent key means no
/// value was supplied for that element. Serializes as the submission wire
/// format: a JSON object of id → value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionValues(HashMap<ElementId, String>);

impl SubmissionValues {
    /// Creates an empty value map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value supplied for an element, if any.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&str> {
        self.0.get(&id).map(String::as_str)
    }

    /// Records the value for an element, replacing any previous one.
    pub fn set(&mut self, id: ElementId, value: impl Into<String>) {
        self.0.insert(id, value.into());
    }

    /// Returns the number of supplied values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no values were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serializes to the submission wire format.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parses the submission wire format.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}

impl FromIterator<(ElementId, String)> for SubmissionValues {
    fn from_iter<I: IntoIterator<Item = (ElementId, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
