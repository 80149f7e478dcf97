//! In-process guest store
//!
//! Mirrors the table's constraints (NOT NULL names and phone, UNIQUE phone
//! and email) so callers see the same `DbError` outcomes as with PostgreSQL.
//! Ids come from a counter and are never reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::store::{DbError, GuestStore};
use crate::models::{Guest, GuestDraft, GuestId};

#[derive(Default)]
struct Table {
    last_id: GuestId,
    rows: BTreeMap<GuestId, Guest>,
}

impl Table {
    fn check_unique(&self, draft: &GuestDraft, skip: Option<GuestId>) -> Result<(), DbError> {
        let others = self.rows.values().filter(|g| Some(g.id) != skip);
        for other in others {
            if draft.phone.as_deref() == Some(other.phone.as_str()) {
                return Err(DbError::Constraint {
                    column: "phone",
                    reason: "unique",
                });
            }
            if draft.email.is_some() && draft.email == other.email {
                return Err(DbError::Constraint {
                    column: "email",
                    reason: "unique",
                });
            }
        }
        Ok(())
    }
}

fn row(id: GuestId, draft: &GuestDraft) -> Result<Guest, DbError> {
    let required = |value: &Option<String>, column: &'static str| {
        value.clone().ok_or(DbError::Constraint {
            column,
            reason: "not null",
        })
    };

    Ok(Guest {
        id,
        first_name: required(&draft.first_name, "first_name")?,
        last_name: required(&draft.last_name, "last_name")?,
        email: draft.email.clone(),
        phone: required(&draft.phone, "phone")?,
        country: draft.country.clone(),
    })
}

/// Guest store held entirely in memory
#[derive(Default)]
pub struct MemoryGuestStore {
    table: RwLock<Table>,
}

impl MemoryGuestStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GuestStore for MemoryGuestStore {
    async fn list_all(&self) -> Result<Vec<Guest>, DbError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: GuestId) -> Result<Option<Guest>, DbError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn create(&self, draft: &GuestDraft) -> Result<GuestId, DbError> {
        let mut table = self.table.write().await;
        table.check_unique(draft, None)?;

        let id = table.last_id + 1;
        let guest = row(id, draft)?;
        table.last_id = id;
        table.rows.insert(id, guest);
        Ok(id)
    }

    async fn update(&self, id: GuestId, draft: &GuestDraft) -> Result<(), DbError> {
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&id) {
            return Err(DbError::NotFound {
                resource: "guest",
                id: id.to_string(),
            });
        }
        table.check_unique(draft, Some(id))?;

        let guest = row(id, draft)?;
        table.rows.insert(id, guest);
        Ok(())
    }

    async fn delete(&self, id: GuestId) -> Result<u64, DbError> {
        let removed = self.table.write().await.rows.remove(&id);
        Ok(u64::from(removed.is_some()))
    }

    async fn email_exists(
        &self,
        email: &str,
        exclude_id: Option<GuestId>,
    ) -> Result<bool, DbError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .any(|g| Some(g.id) != exclude_id && g.email.as_deref() == Some(email)))
    }

    async fn phone_exists(
        &self,
        phone: &str,
        exclude_id: Option<GuestId>,
    ) -> Result<bool, DbError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .any(|g| Some(g.id) != exclude_id && g.phone == phone))
    }
}
