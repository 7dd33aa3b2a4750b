//! In-memory user directory backed by Argon2 password hashes.
//!
//! Users are configured as `username:phc-hash` pairs. Verification runs
//! on the blocking thread pool since Argon2 is deliberately slow.
//!
//! # Example
//!
//! ```ignore
//! let hash = hash_password("s3cret")?;
//! let directory = InMemoryUserDirectory::new().with_user("shop", hash)?;
//! let user = directory.authenticate(&Credentials::new("shop", "s3cret")).await?;
//! ```

use std::collections::HashMap;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::domain::foundation::{
    AuthError, AuthenticatedUser, Credentials, Username, ValidationError,
};
use crate::ports::UserDirectory;

/// User directory holding Argon2 PHC hashes in memory.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserDirectory {
    users: HashMap<String, String>,
}

impl InMemoryUserDirectory {
    /// Creates an empty directory. Every authentication attempt fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user with a pre-computed PHC hash.
    pub fn with_user(
        mut self,
        username: impl Into<String>,
        phc_hash: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let username = Username::new(username)?;
        let phc_hash = phc_hash.into();
        PasswordHash::new(&phc_hash)
            .map_err(|e| ValidationError::invalid_format("password_hash", e.to_string()))?;

        self.users.insert(username.as_str().to_string(), phc_hash);
        Ok(self)
    }

    /// Builds a directory from `user:hash` entries separated by `;`.
    ///
    /// PHC strings contain commas, so `;` is used between entries.
    pub fn from_entries(entries: &str) -> Result<Self, ValidationError> {
        entries
            .split(';')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .try_fold(Self::new(), |directory, entry| {
                let (username, hash) = entry.split_once(':').ok_or_else(|| {
                    ValidationError::invalid_format("auth.users", "expected username:hash")
                })?;
                directory.with_user(username.trim(), hash.trim())
            })
    }

    /// Returns the number of registered users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthenticatedUser, AuthError> {
        let Some(stored) = self.users.get(credentials.username()).cloned() else {
            tracing::debug!(username = credentials.username(), "Unknown user");
            return Err(AuthError::InvalidCredentials);
        };

        let password = credentials.password().expose_secret().clone();
        let verified = tokio::task::spawn_blocking(move || verify_password(&stored, &password))
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?;

        if !verified {
            tracing::debug!(username = credentials.username(), "Password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let username = Username::new(credentials.username())
            .map_err(|_| AuthError::InvalidCredentials)?;
        Ok(AuthenticatedUser::new(username))
    }
}

fn verify_password(phc_hash: &str, password: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(phc_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Hashes a password with Argon2id, producing a PHC string for configuration.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::service_unavailable(format!("failed to hash password: {}", e)))
}
