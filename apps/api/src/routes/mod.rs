pub mod health;

use axum::{routing::get, Router};

use crate::snippets::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/snippets",
            get(handlers::handle_list_mine).post(handlers::handle_create_snippet),
        )
        .route(
            "/api/v1/snippets/:id",
            get(handlers::handle_get_snippet)
                .patch(handlers::handle_update_snippet)
                .delete(handlers::handle_delete_snippet),
        )
        .with_state(state)
}
