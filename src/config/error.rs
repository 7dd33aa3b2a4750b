//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidHost(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid auth user entry: {0}")]
    InvalidUserEntry(String),

    #[error("No API users configured")]
    NoUsersConfigured,

    #[error("Page size must be between 1 and 1000")]
    InvalidPageSize,

    #[error("Stock update attempts must be between 1 and 50")]
    InvalidStockAttempts,

    #[error("Build hook URL must use http or https")]
    InvalidBuildHookUrl,

    #[error("Build hook URL must use HTTPS in production")]
    BuildHookMustBeHttps,

    #[error("Build hook attempts must be between 1 and 10")]
    InvalidBuildHookAttempts,

    #[error("Build hook queue capacity must be at least 1")]
    InvalidQueueCapacity,
}
