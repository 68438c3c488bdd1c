//! CodeVault API - ownership-scoped storage for code snippets
//!
//! Every snippet belongs to the user who created it, and every read or
//! write is checked against the caller's identity. The HTTP layer in
//! [`routes`] and [`snippets::handlers`] is a thin shell over the access
//! operations in [`snippets::ops`], which work against any
//! [`store::SnippetStore`] backend.

pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod routes;
pub mod snippets;
pub mod state;
pub mod store;
