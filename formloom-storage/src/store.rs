use crate::error::{StorageError, StorageResult};
use crate::record::{FormRecord, SubmissionRecord};
use async_trait::async_trait;
use formloom_types::{FormId, SubmissionId};
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// The persistence contract consumed by the designer's hosting surface.
///
/// Forms are addressed by [`FormId`] on the authoring side and by share
/// token on the public submission side. All failures are returned to the
/// caller; implementations do not retry.
#[async_trait]
pub trait FormStore: Send + Sync {
    /// Creates a new, unpublished form with empty content.
    async fn create(&self, name: &str, description: &str) -> StorageResult<FormId>;

    /// Loads a form by id.
    async fn load(&self, form_id: FormId) -> StorageResult<FormRecord>;

    /// Replaces a form's content with a serialized document snapshot.
    ///
    /// Fails with [`StorageError::AlreadyPublished`] once the form is
    /// published: published content is frozen.
    async fn save(&self, form_id: FormId, content: &str) -> StorageResult<()>;

    /// Publishes a form, returning its share token. Idempotent.
    async fn publish(&self, form_id: FormId) -> StorageResult<String>;

    /// Loads a published form by share token, counting the visit.
    async fn record_visit(&self, share_token: &str) -> StorageResult<FormRecord>;

    /// Stores a submission for the published form behind a share token.
    async fn submit(&self, share_token: &str, values: &str) -> StorageResult<SubmissionId>;

    /// Lists a form's submissions in arrival order.
    async fn submissions(&self, form_id: FormId) -> StorageResult<Vec<SubmissionRecord>>;
}

/// In-memory [`FormStore`] for tests and single-process embedding.
#[derive(Debug, Default)]
pub struct MemoryFormStore {
    forms: RwLock<HashMap<FormId, FormRecord>>,
    submissions: RwLock<HashMap<FormId, Vec<SubmissionRecord>>>,
}

impl MemoryFormStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FormStore for MemoryFormStore {
    async fn create(&self, name: &str, description: &str) -> StorageResult<FormId> {
        let now = now_millis();
        let record = FormRecord {
            id: FormId::new(),
            name: name.to_string(),
            description: description.to_string(),
            published: false,
            content: String::new(),
            share_token: uuid::Uuid::new_v4().simple().to_string(),
            visits: 0,
            submissions: 0,
            created_at: now,
            modified_at: now,
        };
        let id = record.id;
        self.forms.write().await.insert(id, record);
        debug!(form = %id, "form created");
        Ok(id)
    }

    async fn load(&self, form_id: FormId) -> StorageResult<FormRecord> {
        self.forms
            .read()
            .await
            .get(&form_id)
            .cloned()
            .ok_or(StorageError::FormNotFound(form_id))
    }

    async fn save(&self, form_id: FormId, content: &str) -> StorageResult<()> {
        let mut forms = self.forms.write().await;
        let record = forms
            .get_mut(&form_id)
            .ok_or(StorageError::FormNotFound(form_id))?;
        if record.published {
            warn!(form = %form_id, "rejected save: form is published");
            return Err(StorageError::AlreadyPublished(form_id));
        }
        record.content = content.to_string();
        record.modified_at = now_millis();
        debug!(form = %form_id, bytes = content.len(), "form content saved");
        Ok(())
    }

    async fn publish(&self, form_id: FormId) -> StorageResult<String> {
        let mut forms = self.forms.write().await;
        let record = forms
            .get_mut(&form_id)
            .ok_or(StorageError::FormNotFound(form_id))?;
        record.published = true;
        record.modified_at = now_millis();
        debug!(form = %form_id, token = %record.share_token, "form published");
        Ok(record.share_token.clone())
    }

    async fn record_visit(&self, share_token: &str) -> StorageResult<FormRecord> {
        let mut forms = self.forms.write().await;
        let record = published_by_token(&mut forms, share_token)?;
        record.visits += 1;
        Ok(record.clone())
    }

    async fn submit(&self, share_token: &str, values: &str) -> StorageResult<SubmissionId> {
        let mut forms = self.forms.write().await;
        let record = published_by_token(&mut forms, share_token)?;
        record.submissions += 1;
        let form_id = record.id;
        drop(forms);

        let submission = SubmissionRecord {
            id: SubmissionId::new(),
            form_id,
            content: values.to_string(),
            created_at: now_millis(),
        };
        let id = submission.id;
        self.submissions
            .write()
            .await
            .entry(form_id)
            .or_default()
            .push(submission);
        debug!(form = %form_id, submission = %id, "submission stored");
        Ok(id)
    }

    async fn submissions(&self, form_id: FormId) -> StorageResult<Vec<SubmissionRecord>> {
        if !self.forms.read().await.contains_key(&form_id) {
            return Err(StorageError::FormNotFound(form_id));
        }
        Ok(self
            .submissions
            .read()
            .await
            .get(&form_id)
            .cloned()
            .unwrap_or_default())
    }
}

/// Looks up the published form behind a share token.
///
/// An unpublished form's token resolves to nothing: drafts are not
/// reachable from the public side.
fn published_by_token<'a>(
    forms: &'a mut HashMap<FormId, FormRecord>,
    share_token: &str,
) -> StorageResult<&'a mut FormRecord> {
    forms
        .values_mut()
        .find(|record| record.published && record.share_token == share_token)
        .ok_or_else(|| StorageError::ShareTokenNotFound(share_token.to_string()))
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before Unix epoch")
        .as_millis() as i64
}
