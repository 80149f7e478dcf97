//! Guest operations
//!
//! Create and update share one pipeline: validate → fill in country from the
//! phone's dialing code when none was given → write through to the store.

use std::sync::Arc;

use crate::db::{DbError, GuestStore};
use crate::models::{country_for_phone, Guest, GuestDraft, GuestId, GuestPayload, ValidationErrors};

use super::validation::validate_guest;

/// Outcome of a guest operation that didn't succeed
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("guest {0} not found")]
    NotFound(GuestId),

    #[error(transparent)]
    Storage(#[from] DbError),
}

/// Guest operations over an injected store
#[derive(Clone)]
pub struct GuestService {
    store: Arc<dyn GuestStore>,
}

impl GuestService {
    pub fn new(store: Arc<dyn GuestStore>) -> Self {
        Self { store }
    }

    /// All guests.
    pub async fn list(&self) -> Result<Vec<Guest>, ServiceError> {
        Ok(self.store.list_all().await?)
    }

    /// One guest by id.
    pub async fn get(&self, id: GuestId) -> Result<Guest, ServiceError> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    /// Validate and insert a new guest, returning its id.
    pub async fn create(&self, payload: GuestPayload) -> Result<GuestId, ServiceError> {
        let draft = payload.into_draft();
        self.check(&draft, None).await?;

        let draft = with_country(draft).normalized();
        let id = self.store.create(&draft).await?;

        tracing::info!(id, "guest created");
        Ok(id)
    }

    /// Merge submitted fields over the stored guest, validate and persist.
    pub async fn update(&self, id: GuestId, payload: GuestPayload) -> Result<(), ServiceError> {
        let existing = self.get(id).await?;

        let draft = payload.merge_onto(existing);
        self.check(&draft, Some(id)).await?;

        let draft = with_country(draft).normalized();
        self.store.update(id, &draft).await?;

        tracing::info!(id, "guest updated");
        Ok(())
    }

    /// Delete an existing guest. Unknown ids are `NotFound`.
    pub async fn delete(&self, id: GuestId) -> Result<(), ServiceError> {
        self.get(id).await?;
        self.store.delete(id).await?;

        tracing::info!(id, "guest deleted");
        Ok(())
    }

    async fn check(&self, draft: &GuestDraft, exclude_id: Option<GuestId>) -> Result<(), ServiceError> {
        let errors = validate_guest(self.store.as_ref(), draft, exclude_id).await?;
        if errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(fields = %errors, "guest rejected");
            Err(ServiceError::Validation(errors))
        }
    }
}

/// Fill `country` from the phone when it is missing or empty.
fn with_country(mut draft: GuestDraft) -> GuestDraft {
    if draft.country().is_none() {
        draft.country = draft
            .phone()
            .and_then(country_for_phone)
            .map(str::to_owned);
    }
    draft
}
