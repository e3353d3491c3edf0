use formloom_types::{FormId, SubmissionId};
use serde::{Deserialize, Serialize};

/// A stored form.
///
/// `content` is the serialized document, an opaque text blob from the
/// store's perspective, round-tripped verbatim. Timestamps are milliseconds
/// since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    pub id: FormId,
    pub name: String,
    pub description: String,
    pub published: bool,
    pub content: String,
    /// Public token for the submission page; distinct from the form id so
    /// the id never leaks into share links.
    pub share_token: String,
    pub visits: u64,
    pub submissions: u64,
    pub created_at: i64,
    pub modified_at: i64,
}

/// One stored submission for a form.
///
/// `content` is the serialized submission value map, stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: SubmissionId,
    pub form_id: FormId,
    pub content: String,
    pub created_at: i64,
}
