//! Basic-Auth middleware and extractor for axum.
//!
//! This module provides:
//! - `basic_auth_middleware` - Layer that verifies Basic-Auth credentials and injects the user
//! - `RequireAuth` - Extractor that requires an authenticated user
//!
//! # Architecture
//!
//! The middleware uses the `UserDirectory` port, so the credential store can
//! be swapped without touching the HTTP layer.
//!
//! ```text
//! Request → basic_auth_middleware → injects AuthenticatedUser into extensions
//!                                            ↓
//!                                    Handler → RequireAuth extractor reads from extensions
//! ```
//!
//! Unlike session-based auth there is no optional mode: a protected route
//! rejects the request with 401 before the handler runs, so the body is
//! never read for unauthenticated callers.
//!
//! # Example
//!
//! ```ignore
//! let directory: Arc<dyn UserDirectory> = Arc::new(InMemoryUserDirectory::new());
//!
//! let route = post(update_stock)
//!     .route_layer(middleware::from_fn_with_state(directory, basic_auth_middleware));
//! ```

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::adapters::http::error::ApiError;
use crate::domain::foundation::{AuthError, AuthenticatedUser, Credentials};
use crate::ports::UserDirectory;

/// Auth middleware state - wraps the user directory.
pub type AuthState = Arc<dyn UserDirectory>;

/// Authentication middleware for HTTP Basic-Auth.
///
/// 1. Reads the `Authorization` header and decodes `user:password`
/// 2. Verifies the pair with the `UserDirectory` port
/// 3. On success, injects `AuthenticatedUser` into request extensions
/// 4. Otherwise responds 401 (or 503 if the directory is unavailable)
pub async fn basic_auth_middleware(
    State(directory): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let credentials = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(Credentials::from_basic_header);

    let Some(credentials) = credentials else {
        tracing::debug!(path = %request.uri().path(), "Missing Basic-Auth credentials");
        return ApiError::from(AuthError::MissingCredentials).into_response();
    };

    match directory.authenticate(&credentials).await {
        Ok(user) => {
            tracing::debug!(username = %user.username, "Authenticated request");
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(e) => {
            tracing::info!(
                username = credentials.username(),
                error = %e,
                "Authentication failed"
            );
            ApiError::from(e).into_response()
        }
    }
}

/// Extractor that requires authentication.
///
/// Reads the user placed in extensions by [`basic_auth_middleware`]. If
/// the route was mounted without the middleware it rejects with 401.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(RequireAuth)
            .ok_or_else(ApiError::not_logged_in)
    }
}
