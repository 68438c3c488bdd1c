//! Caller identity. Handlers never parse tokens themselves: the
//! [`MaybeCaller`] extractor runs the configured [`IdentityResolver`] over
//! the `Authorization` header and hands each operation an
//! `Option<Principal>`. Resolution never rejects a request; a missing or
//! bad token just means an anonymous caller, and the per-operation policy
//! decides what that means.

pub mod jwt;

pub use jwt::JwtResolver;

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use std::convert::Infallible;

use crate::state::AppState;

/// An authenticated caller. `id` is the stable subject identifier issued
/// by the auth provider; the resolver contract guarantees it is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: String,
}

/// Maps a bearer token to the caller it identifies.
pub trait IdentityResolver: Send + Sync {
    /// Returns the principal for a token, or `None` for anything invalid,
    /// expired, or subject-less. Anonymity is a state, not an error.
    fn resolve(&self, token: &str) -> Option<Principal>;
}

/// The resolved caller, if any.
#[derive(Debug, Clone)]
pub struct MaybeCaller(pub Option<Principal>);

impl MaybeCaller {
    pub fn principal(&self) -> Option<&Principal> {
        self.0.as_ref()
    }
}

#[async_trait]
impl FromRequestParts<AppState> for MaybeCaller {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        Ok(MaybeCaller(token.and_then(|t| state.identity.resolve(t))))
    }
}
