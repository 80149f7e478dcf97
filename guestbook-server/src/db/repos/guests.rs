//! Guest repository
//!
//! Thin parameterized-query wrappers over the `guests` table:
//! - create: INSERT ... RETURNING id
//! - update: full-row replace, NotFound when no row matched
//! - delete: idempotent, reports affected rows

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::store::{DbError, GuestStore};
use crate::models::{Guest, GuestDraft, GuestId};

/// Guest repository backed by PostgreSQL
#[derive(Clone)]
pub struct GuestRepo {
    pool: PgPool,
}

impl GuestRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuestStore for GuestRepo {
    async fn list_all(&self) -> Result<Vec<Guest>, DbError> {
        let guests: Vec<Guest> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, email, phone, country
            FROM guests
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(count = guests.len(), "listed guests");
        Ok(guests)
    }

    async fn get_by_id(&self, id: GuestId) -> Result<Option<Guest>, DbError> {
        let guest: Option<Guest> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, email, phone, country
            FROM guests
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(guest)
    }

    async fn create(&self, draft: &GuestDraft) -> Result<GuestId, DbError> {
        let id: GuestId = sqlx::query_scalar(
            r#"
            INSERT INTO guests (first_name, last_name, email, phone, country)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(draft.first_name.as_deref())
        .bind(draft.last_name.as_deref())
        .bind(draft.email.as_deref())
        .bind(draft.phone.as_deref())
        .bind(draft.country.as_deref())
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id, "inserted guest");
        Ok(id)
    }

    async fn update(&self, id: GuestId, draft: &GuestDraft) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE guests SET
                first_name = $1,
                last_name = $2,
                email = $3,
                phone = $4,
                country = $5
            WHERE id = $6
            "#,
        )
        .bind(draft.first_name.as_deref())
        .bind(draft.last_name.as_deref())
        .bind(draft.email.as_deref())
        .bind(draft.phone.as_deref())
        .bind(draft.country.as_deref())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "guest",
                id: id.to_string(),
            });
        }

        tracing::debug!(id, "updated guest");
        Ok(())
    }

    async fn delete(&self, id: GuestId) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM guests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(id, rows = result.rows_affected(), "deleted guest");
        Ok(result.rows_affected())
    }

    async fn email_exists(
        &self,
        email: &str,
        exclude_id: Option<GuestId>,
    ) -> Result<bool, DbError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM guests
            WHERE email = $1
            AND ($2::int4 IS NULL OR id <> $2)
            "#,
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    async fn phone_exists(
        &self,
        phone: &str,
        exclude_id: Option<GuestId>,
    ) -> Result<bool, DbError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM guests
            WHERE phone = $1
            AND ($2::int4 IS NULL OR id <> $2)
            "#,
        )
        .bind(phone)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }
}
