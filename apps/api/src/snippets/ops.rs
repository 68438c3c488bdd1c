//! The five access-layer operations. Each takes the store handle and the
//! resolved caller as explicit arguments and never reads ambient request
//! state.
//!
//! A missing caller fails with [`AppError::Unauthenticated`] everywhere
//! except [`list_mine`], which answers anonymous callers with an empty
//! list. Fetch-by-id paths report "does not exist" and "exists but not
//! yours" as the single [`AppError::NotFoundOrUnauthorized`] kind.

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::Principal;
use crate::errors::AppError;
use crate::models::{NewSnippet, Snippet, SnippetPatch};
use crate::store::{SnippetStore, StoreError};

/// Input for [`create_snippet`]. Empty strings are accepted here; keeping
/// the user from saving a blank title is the form's job, not this layer's.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateSnippet {
    pub title: String,
    pub code: String,
    pub language: String,
    pub tags: Vec<String>,
    pub description: Option<String>,
}

/// All snippets belonging to the caller, newest first. An anonymous caller
/// gets an empty list rather than an error; the other four operations
/// hard-fail instead.
pub async fn list_mine(
    store: &dyn SnippetStore,
    caller: Option<&Principal>,
) -> Result<Vec<Snippet>, AppError> {
    let Some(caller) = caller else {
        return Ok(Vec::new());
    };
    Ok(store.list_by_owner(&caller.id).await?)
}

/// A single snippet by id, visible only to its owner.
pub async fn get_by_id(
    store: &dyn SnippetStore,
    caller: Option<&Principal>,
    snippet_id: Uuid,
) -> Result<Snippet, AppError> {
    let caller = caller.ok_or(AppError::Unauthenticated)?;
    match store.get(snippet_id).await? {
        Some(snippet) if snippet.owner_id == caller.id => Ok(snippet),
        _ => Err(AppError::NotFoundOrUnauthorized),
    }
}

/// Creates a snippet owned by the caller and returns its id. Both
/// timestamps are stamped from the same instant, so a fresh record always
/// has `created_at == updated_at`.
pub async fn create_snippet(
    store: &dyn SnippetStore,
    caller: Option<&Principal>,
    input: CreateSnippet,
) -> Result<Uuid, AppError> {
    let caller = caller.ok_or(AppError::Unauthenticated)?;
    let now = Utc::now().timestamp_millis();

    let id = store
        .insert(NewSnippet {
            owner_id: caller.id.clone(),
            title: input.title,
            code: input.code,
            language: input.language,
            tags: input.tags,
            description: input.description,
            created_at: now,
            updated_at: now,
        })
        .await?;

    Ok(id)
}

/// Applies a partial update to a caller-owned snippet and refreshes
/// `updated_at`. Fields absent from the patch keep their values; an empty
/// patch is still a valid update that bumps the timestamp.
pub async fn update_snippet(
    store: &dyn SnippetStore,
    caller: Option<&Principal>,
    snippet_id: Uuid,
    patch: SnippetPatch,
) -> Result<bool, AppError> {
    let caller = caller.ok_or(AppError::Unauthenticated)?;

    match store.get(snippet_id).await? {
        Some(snippet) if snippet.owner_id == caller.id => {}
        _ => return Err(AppError::NotFoundOrUnauthorized),
    }

    let now = Utc::now().timestamp_millis();
    match store.patch(snippet_id, patch, now).await {
        Ok(()) => Ok(true),
        // A concurrent delete between the check and the write reads as
        // not-found.
        Err(StoreError::Missing) => Err(AppError::NotFoundOrUnauthorized),
        Err(e) => Err(e.into()),
    }
}

/// Permanently deletes a caller-owned snippet. Ids are never reused, so a
/// second delete of the same id fails like any other unknown id.
pub async fn delete_snippet(
    store: &dyn SnippetStore,
    caller: Option<&Principal>,
    snippet_id: Uuid,
) -> Result<bool, AppError> {
    let caller = caller.ok_or(AppError::Unauthenticated)?;

    match store.get(snippet_id).await? {
        Some(snippet) if snippet.owner_id == caller.id => {}
        _ => return Err(AppError::NotFoundOrUnauthorized),
    }

    match store.delete(snippet_id).await {
        Ok(()) => Ok(true),
        Err(StoreError::Missing) => Err(AppError::NotFoundOrUnauthorized),
        Err(e) => Err(e.into()),
    }
}
