//! Guest store contract
//!
//! Handlers and the service talk to `dyn GuestStore`; PostgreSQL and the
//! in-memory store both implement it.

use async_trait::async_trait;

use crate::models::{Guest, GuestDraft, GuestId};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("constraint violated on {column}: {reason}")]
    Constraint {
        column: &'static str,
        reason: &'static str,
    },
}

/// CRUD over the `guests` table plus the existence checks validation needs.
#[async_trait]
pub trait GuestStore: Send + Sync {
    /// All guests. No ordering is promised.
    async fn list_all(&self) -> Result<Vec<Guest>, DbError>;

    /// A single guest, or `None` when the id is unknown.
    async fn get_by_id(&self, id: GuestId) -> Result<Option<Guest>, DbError>;

    /// Insert a guest and return the generated id.
    async fn create(&self, draft: &GuestDraft) -> Result<GuestId, DbError>;

    /// Replace every non-id column of an existing guest.
    ///
    /// Fails with `DbError::NotFound` when the id is unknown.
    async fn update(&self, id: GuestId, draft: &GuestDraft) -> Result<(), DbError>;

    /// Delete a guest, returning the number of rows removed (0 or 1).
    async fn delete(&self, id: GuestId) -> Result<u64, DbError>;

    /// Whether any guest other than `exclude_id` has this email.
    async fn email_exists(&self, email: &str, exclude_id: Option<GuestId>)
        -> Result<bool, DbError>;

    /// Whether any guest other than `exclude_id` has this phone.
    async fn phone_exists(&self, phone: &str, exclude_id: Option<GuestId>)
        -> Result<bool, DbError>;
}
