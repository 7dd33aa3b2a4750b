//! API error envelope.
//!
//! Every error leaves the service in the same shape:
//!
//! ```json
//! {"code": "rest_no_route", "message": "...", "data": {"status": 404}}
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::content::ContentError;
use crate::domain::foundation::AuthError;

pub const NO_ROUTE_CODE: &str = "rest_no_route";
pub const NO_ROUTE_MESSAGE: &str = "No route was found matching the URL and request method";
pub const NOT_LOGGED_IN_CODE: &str = "rest_not_logged_in";
pub const NOT_LOGGED_IN_MESSAGE: &str = "You are not currently logged in.";
pub const INVALID_PAYLOAD_CODE: &str = "rest_invalid_payload";
pub const INVALID_PAYLOAD_MESSAGE: &str = "You provided empty or invalid payload.";

/// Serialized error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub data: ErrorData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorData {
    pub status: u16,
}

/// An error that renders as an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// No route matches the path and method.
    pub fn no_route() -> Self {
        Self::new(StatusCode::NOT_FOUND, NO_ROUTE_CODE, NO_ROUTE_MESSAGE)
    }

    pub fn not_logged_in() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, NOT_LOGGED_IN_CODE, NOT_LOGGED_IN_MESSAGE)
    }

    pub fn invalid_payload() -> Self {
        Self::new(StatusCode::BAD_REQUEST, INVALID_PAYLOAD_CODE, INVALID_PAYLOAD_MESSAGE)
    }

    pub fn service_unavailable() -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "rest_service_unavailable",
            "The service is temporarily unavailable.",
        )
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "rest_internal_error",
            "The server encountered an internal error.",
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn to_body(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.code.to_string(),
            message: self.message.clone(),
            data: ErrorData {
                status: self.status.as_u16(),
            },
        }
    }
}

impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::InvalidPayload(reason) => {
                tracing::debug!(%reason, "Rejected payload");
                ApiError::invalid_payload()
            }
            ContentError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "Content operation failed");
                ApiError::internal()
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingCredentials | AuthError::InvalidCredentials => {
                ApiError::not_logged_in()
            }
            AuthError::ServiceUnavailable(msg) => {
                tracing::error!("Auth service unavailable: {}", msg);
                ApiError::service_unavailable()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.to_body())).into_response()
    }
}

/// Fallback handler for anything outside the route table.
pub async fn no_route() -> ApiError {
    ApiError::no_route()
}
