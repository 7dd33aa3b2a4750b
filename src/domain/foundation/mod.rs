//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, credentials and error types that form the
//! vocabulary of the storefront content domain.

mod auth;
mod errors;
mod ids;

pub use auth::{AuthError, AuthenticatedUser, Credentials};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ContentId, Username};
