//! User directory port for credential verification.
//!
//! The HTTP layer decodes Basic-Auth headers into [`Credentials`]; this
//! port decides whether they belong to a known user. No sessions or
//! tokens are issued, so every protected request calls it once.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, Credentials};

/// Verifies usernames and passwords.
///
/// # Contract
///
/// Implementations must:
/// - Return `AuthError::InvalidCredentials` for both unknown users and wrong
///   passwords, without revealing which
/// - Return `AuthError::ServiceUnavailable` for transient failures
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials)
        -> Result<AuthenticatedUser, AuthError>;
}
