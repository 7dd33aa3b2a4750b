//! HTTP DTOs for content endpoints.
//!
//! Response bodies are the application views; this module only adds the
//! collection and path conventions of the API.

use crate::domain::foundation::ContentId;

use super::super::error::ApiError;

pub use crate::application::handlers::content::{
    BrandSummary as BrandResponse, PostView as PostResponse, ProductView as ProductResponse,
};

/// Collection body: `null` instead of an empty array.
pub fn collection<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

/// Parses the `:id` path segment. Anything but ASCII digits is not a route.
pub fn parse_id(raw: &str) -> Result<ContentId, ApiError> {
    raw.parse().map_err(|_| ApiError::no_route())
}
