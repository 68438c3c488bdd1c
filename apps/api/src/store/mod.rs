//! Storage layer. [`SnippetStore`] is the seam between the access-layer
//! operations and whatever holds the records: [`PgStore`] in production,
//! [`MemStore`] in tests and throwaway dev setups. Implementations own id
//! generation and the `by_owner` listing order; ownership checks and
//! timestamp stamping stay in the operations layer.

pub mod memory;
pub mod postgres;

pub use memory::MemStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{NewSnippet, Snippet, SnippetPatch};

/// Persistence errors. `Missing` covers `patch`/`delete` against an id that
/// is not present; everything else is a backend failure surfaced verbatim.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    Missing,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// The durable snippet collection plus its owner index.
#[async_trait]
pub trait SnippetStore: Send + Sync {
    /// Inserts a record and returns the id the store assigned to it. Ids
    /// are unique for the lifetime of the store and never reused.
    async fn insert(&self, new: NewSnippet) -> Result<Uuid, StoreError>;

    /// Point lookup by id.
    async fn get(&self, id: Uuid) -> Result<Option<Snippet>, StoreError>;

    /// Applies the supplied field overrides and stamps `updated_at`.
    async fn patch(
        &self,
        id: Uuid,
        fields: SnippetPatch,
        updated_at: i64,
    ) -> Result<(), StoreError>;

    /// Permanently removes a record and its owner-index entry.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    /// All records for one owner, newest first: descending `created_at`,
    /// later insertion first within a timestamp tie.
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Snippet>, StoreError>;
}
