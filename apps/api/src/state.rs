use std::sync::Arc;

use crate::auth::IdentityResolver;
use crate::store::SnippetStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Durable snippet collection. `PgStore` in production, `MemStore` in tests.
    pub store: Arc<dyn SnippetStore>,
    /// Bearer-token verifier for the auth provider's access tokens.
    pub identity: Arc<dyn IdentityResolver>,
}
