//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SMARTWATCH_API` prefix and nested values use double underscores as separators.
//!
//! Every setting has a default, so an empty environment yields a working
//! development configuration.
//!
//! # Example
//!
//! ```no_run
//! use smartwatch_api::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod build_hook;
mod content;
mod error;
mod server;

pub use auth::AuthConfig;
pub use build_hook::BuildHookConfig;
pub use content::ContentConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Basic-Auth users for protected endpoints
    #[serde(default)]
    pub auth: AuthConfig,

    /// Content store and listing settings
    #[serde(default)]
    pub content: ContentConfig,

    /// Outbound build hook
    #[serde(default)]
    pub build_hook: BuildHookConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SMARTWATCH_API` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SMARTWATCH_API__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SMARTWATCH_API__BUILD_HOOK__URL=...` -> `build_hook.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SMARTWATCH_API")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.auth.validate(&self.server.environment)?;
        self.content.validate()?;
        self.build_hook.validate(&self.server.environment)?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "SMARTWATCH_API__SERVER__PORT",
        "SMARTWATCH_API__SERVER__ENVIRONMENT",
        "SMARTWATCH_API__AUTH__USERS",
        "SMARTWATCH_API__CONTENT__PAGE_SIZE",
        "SMARTWATCH_API__CONTENT__SEED_PATH",
        "SMARTWATCH_API__BUILD_HOOK__URL",
        "SMARTWATCH_API__BUILD_HOOK__SECRET",
        "SMARTWATCH_API__BUILD_HOOK__MAX_ATTEMPTS",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.content.page_size, 100);
        assert!(!config.build_hook.is_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_nested_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SMARTWATCH_API__SERVER__PORT", "3000");
        env::set_var("SMARTWATCH_API__CONTENT__PAGE_SIZE", "25");
        env::set_var("SMARTWATCH_API__CONTENT__SEED_PATH", "/data/seed.json");
        env::set_var("SMARTWATCH_API__BUILD_HOOK__URL", "https://hooks.example.com/build");
        env::set_var("SMARTWATCH_API__BUILD_HOOK__SECRET", "whsec");
        env::set_var("SMARTWATCH_API__BUILD_HOOK__MAX_ATTEMPTS", "6");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.content.page_size, 25);
        assert_eq!(
            config.content.seed_path.as_deref(),
            Some(std::path::Path::new("/data/seed.json"))
        );
        assert_eq!(
            config.build_hook.url.as_deref(),
            Some("https://hooks.example.com/build")
        );
        assert_eq!(
            config.build_hook.secret.as_ref().map(|s| s.expose_secret().as_str()),
            Some("whsec")
        );
        assert_eq!(config.build_hook.max_attempts, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SMARTWATCH_API__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        // Production without users is rejected
        assert_eq!(config.validate(), Err(ValidationError::NoUsersConfigured));
    }

    #[test]
    fn test_invalid_number_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SMARTWATCH_API__SERVER__PORT", "eighty");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
