//! HTTP middleware for axum.
//!
//! - `auth` - Basic-Auth middleware and extractor

pub mod auth;

pub use auth::{basic_auth_middleware, AuthState, RequireAuth};
