//! Content-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | InvalidPayload | 400 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised by content queries and commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// The request body was empty or could not be understood.
    InvalidPayload(String),

    /// Storage or another collaborator failed.
    Infrastructure(String),
}

impl ContentError {
    pub fn invalid_payload(reason: impl Into<String>) -> Self {
        ContentError::InvalidPayload(reason.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ContentError::Infrastructure(message.into())
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            ContentError::InvalidPayload(reason) => format!("Invalid payload: {}", reason),
            ContentError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ContentError {}

impl From<DomainError> for ContentError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => ContentError::InvalidPayload(err.message),
            _ => ContentError::Infrastructure(err.to_string()),
        }
    }
}
