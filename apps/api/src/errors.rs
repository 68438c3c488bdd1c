use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// No resolvable caller identity.
    #[error("Not authenticated")]
    Unauthenticated,

    /// The record does not exist, or it belongs to a different principal.
    /// The two cases are deliberately indistinguishable so that non-owners
    /// cannot learn whether a snippet exists.
    #[error("Snippet not found or unauthorized")]
    NotFoundOrUnauthorized,

    /// Persistence failure, propagated without retry.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHENTICATED",
                "Authentication required".to_string(),
            ),
            AppError::NotFoundOrUnauthorized => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND_OR_UNAUTHORIZED",
                "Snippet not found or unauthorized".to_string(),
            ),
            AppError::Store(e) => {
                tracing::error!("Store error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_ERROR",
                    "A storage error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
