//! Error types for the document model.

use formloom_types::ElementId;
use thiserror::Error;

/// Result type for document operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur in document operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// An operation referenced an id absent from the document.
    #[error("element not found: {0}")]
    ElementNotFound(ElementId),

    /// A replacement instance carried a different id than the element it
    /// replaces. Update-by-id never renames.
    #[error("replacement id {got} does not match target id {expected}")]
    IdMismatch {
        expected: ElementId,
        got: ElementId,
    },
}
