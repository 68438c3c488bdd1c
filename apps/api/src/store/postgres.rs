use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{SnippetStore, StoreError};
use crate::models::{NewSnippet, Snippet, SnippetPatch};

/// PostgreSQL-backed [`SnippetStore`]. One statement per operation; the
/// `snippets_by_owner` index (`owner_id, created_at DESC, seq DESC`) serves
/// the listing query already in contract order, with `seq` supplying the
/// insertion-order tie-break for records stamped in the same millisecond.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SnippetStore for PgStore {
    async fn insert(&self, new: NewSnippet) -> Result<Uuid, StoreError> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO snippets (owner_id, title, code, language, tags, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&new.owner_id)
        .bind(&new.title)
        .bind(&new.code)
        .bind(&new.language)
        .bind(&new.tags)
        .bind(&new.description)
        .bind(new.created_at)
        .bind(new.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Snippet>, StoreError> {
        Ok(sqlx::query_as::<_, Snippet>(
            r#"
            SELECT id, owner_id, title, code, language, tags, description, created_at, updated_at
            FROM snippets
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn patch(
        &self,
        id: Uuid,
        fields: SnippetPatch,
        updated_at: i64,
    ) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE snippets
            SET title       = COALESCE($2, title),
                code        = COALESCE($3, code),
                language    = COALESCE($4, language),
                tags        = COALESCE($5, tags),
                description = COALESCE($6, description),
                updated_at  = $7
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(fields.title)
        .bind(fields.code)
        .bind(fields.language)
        .bind(fields.tags)
        .bind(fields.description)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Missing);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM snippets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Missing);
        }
        Ok(())
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Snippet>, StoreError> {
        Ok(sqlx::query_as::<_, Snippet>(
            r#"
            SELECT id, owner_id, title, code, language, tags, description, created_at, updated_at
            FROM snippets
            WHERE owner_id = $1
            ORDER BY created_at DESC, seq DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?)
    }
}
