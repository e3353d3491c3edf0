//! Error types for the storage boundary.

use formloom_types::FormId;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur in storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No form with this id.
    #[error("form not found: {0}")]
    FormNotFound(FormId),

    /// No published form behind this share token.
    #[error("no published form for share token: {0}")]
    ShareTokenNotFound(String),

    /// The form is published and its content is frozen.
    #[error("form already published: {0}")]
    AlreadyPublished(FormId),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend-specific failure (network, database, ...).
    #[error("backend error: {0}")]
    Backend(String),
}
