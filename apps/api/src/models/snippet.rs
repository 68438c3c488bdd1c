use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored code snippet. `owner_id` is the principal that created the
/// record and never changes; `created_at`/`updated_at` are epoch
/// milliseconds, with `created_at <= updated_at` for the record's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Snippet {
    pub id: Uuid,
    pub owner_id: String,
    pub title: String,
    pub code: String,
    pub language: String,
    /// Kept exactly as submitted: order preserved, duplicates allowed.
    pub tags: Vec<String>,
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Everything the store needs to materialize a new record. The store
/// assigns the id itself.
#[derive(Debug, Clone)]
pub struct NewSnippet {
    pub owner_id: String,
    pub title: String,
    pub code: String,
    pub language: String,
    pub tags: Vec<String>,
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Field-level overrides for an update. `None` leaves a field untouched;
/// `id`, `owner_id` and `created_at` cannot be named at all, and unknown
/// fields are rejected at deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnippetPatch {
    pub title: Option<String>,
    pub code: Option<String>,
    pub language: Option<String>,
    pub tags: Option<Vec<String>>,
    pub description: Option<String>,
}
