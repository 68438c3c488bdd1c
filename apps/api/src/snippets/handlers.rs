use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::MaybeCaller;
use crate::errors::AppError;
use crate::models::{Snippet, SnippetPatch};
use crate::snippets::ops::{self, CreateSnippet};
use crate::state::AppState;

#[derive(Serialize)]
pub struct CreateSnippetResponse {
    pub id: Uuid,
}

/// GET /api/v1/snippets
pub async fn handle_list_mine(
    State(state): State<AppState>,
    caller: MaybeCaller,
) -> Result<Json<Vec<Snippet>>, AppError> {
    let snippets = ops::list_mine(state.store.as_ref(), caller.principal()).await?;
    Ok(Json(snippets))
}

/// GET /api/v1/snippets/:id
pub async fn handle_get_snippet(
    State(state): State<AppState>,
    caller: MaybeCaller,
    Path(id): Path<Uuid>,
) -> Result<Json<Snippet>, AppError> {
    let snippet = ops::get_by_id(state.store.as_ref(), caller.principal(), id).await?;
    Ok(Json(snippet))
}

/// POST /api/v1/snippets
pub async fn handle_create_snippet(
    State(state): State<AppState>,
    caller: MaybeCaller,
    Json(req): Json<CreateSnippet>,
) -> Result<(StatusCode, Json<CreateSnippetResponse>), AppError> {
    let id = ops::create_snippet(state.store.as_ref(), caller.principal(), req).await?;
    Ok((StatusCode::CREATED, Json(CreateSnippetResponse { id })))
}

/// PATCH /api/v1/snippets/:id
pub async fn handle_update_snippet(
    State(state): State<AppState>,
    caller: MaybeCaller,
    Path(id): Path<Uuid>,
    Json(req): Json<SnippetPatch>,
) -> Result<Json<bool>, AppError> {
    let updated = ops::update_snippet(state.store.as_ref(), caller.principal(), id, req).await?;
    Ok(Json(updated))
}

/// DELETE /api/v1/snippets/:id
pub async fn handle_delete_snippet(
    State(state): State<AppState>,
    caller: MaybeCaller,
    Path(id): Path<Uuid>,
) -> Result<Json<bool>, AppError> {
    let deleted = ops::delete_snippet(state.store.as_ref(), caller.principal(), id).await?;
    Ok(Json(deleted))
}
