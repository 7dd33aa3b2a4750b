//! Build hook configuration

use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Outbound build hook called when a post is published.
///
/// With no `url` the hook is disabled and publish events are only logged.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildHookConfig {
    /// Webhook URL (http or https)
    pub url: Option<String>,

    /// HMAC-SHA256 signing secret
    pub secret: Option<SecretString>,

    /// Total delivery attempts per event
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Delay before the first retry; doubles afterwards
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Events buffered before new ones are dropped
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl BuildHookConfig {
    pub fn is_enabled(&self) -> bool {
        self.url.is_some()
    }

    pub fn initial_backoff(&self) -> Duration {
        Duration::from_millis(self.initial_backoff_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate build hook configuration
    ///
    /// In production, requires HTTPS for the hook URL.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if let Some(url) = &self.url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ValidationError::InvalidBuildHookUrl);
            }
            if *environment == Environment::Production && !url.starts_with("https://") {
                return Err(ValidationError::BuildHookMustBeHttps);
            }
        }
        if !(1..=10).contains(&self.max_attempts) {
            return Err(ValidationError::InvalidBuildHookAttempts);
        }
        if self.queue_capacity == 0 {
            return Err(ValidationError::InvalidQueueCapacity);
        }
        Ok(())
    }
}

impl Default for BuildHookConfig {
    fn default() -> Self {
        Self {
            url: None,
            secret: None,
            max_attempts: default_max_attempts(),
            initial_backoff_ms: default_initial_backoff_ms(),
            timeout_secs: default_timeout_secs(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

fn default_max_attempts() -> u32 {
    4
}

fn default_initial_backoff_ms() -> u64 {
    500
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_queue_capacity() -> usize {
    64
}
