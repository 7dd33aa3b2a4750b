//! ContentReader port - read side of the content store.
//!
//! Query handlers depend on this trait rather than on a concrete store,
//! so the API can be served from memory, a database, or a test double.

use async_trait::async_trait;

use crate::domain::content::{ContentItem, ContentKind};
use crate::domain::foundation::{ContentId, DomainError};

/// Read access to content items.
///
/// # Contract
///
/// - `get` returns the item regardless of kind or publishing status.
/// - `list` returns only published items of `kind`, newest
///   `published_at` first (ties broken by ascending id), at most `limit`.
#[async_trait]
pub trait ContentReader: Send + Sync {
    /// Fetches a single item by id.
    async fn get(&self, id: ContentId) -> Result<Option<ContentItem>, DomainError>;

    /// Lists published items of one kind.
    async fn list(&self, kind: ContentKind, limit: usize) -> Result<Vec<ContentItem>, DomainError>;
}
