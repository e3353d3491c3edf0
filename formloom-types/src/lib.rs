//! Core type definitions for formloom.
//!
//! This crate defines the fundamental, renderer-agnostic types used
//! throughout the form designer:
//! - Element, form and submission identifiers
//! - The `FieldKind` type tag that names a registered field type
//!
//! Everything that depends on a concrete field catalog (defaults,
//! validators, palette metadata) belongs in `formloom-registry`, not here.

mod ids;
mod kind;

pub use ids::{ElementId, FormId, SubmissionId};
pub use kind::FieldKind;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
