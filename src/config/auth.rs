//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Basic-Auth users allowed to call protected endpoints.
///
/// `users` is a `;`-separated list of `username:phc-hash` pairs. PHC
/// strings contain commas, hence the semicolon:
///
/// ```text
/// SMARTWATCH_API__AUTH__USERS='shop:$argon2id$v=19$m=19456,t=2,p=1$...;ops:$argon2id$...'
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub users: String,
}

impl AuthConfig {
    /// Non-empty entries, trimmed.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.users
            .split(';')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
    }

    /// Validate authentication configuration
    ///
    /// Every entry must look like `name:$hash`. Production must have at
    /// least one user, otherwise the stock endpoint can never succeed.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let mut count = 0;
        for entry in self.entries() {
            let valid = entry
                .split_once(':')
                .map(|(name, hash)| !name.trim().is_empty() && hash.trim().starts_with('$'))
                .unwrap_or(false);
            if !valid {
                let name = entry.split(':').next().unwrap_or_default();
                return Err(ValidationError::InvalidUserEntry(name.to_string()));
            }
            count += 1;
        }

        if count == 0 && *environment == Environment::Production {
            return Err(ValidationError::NoUsersConfigured);
        }
        Ok(())
    }
}
