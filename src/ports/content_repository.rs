//! ContentRepository port - write side of the content store.
//!
//! Every stored item carries a revision that increases on each write.
//! Stock changes go through [`ContentRepository::compare_and_set_stock`]
//! so that concurrent decrements of the same product cannot overwrite
//! each other.

use async_trait::async_trait;

use crate::domain::content::{ContentItem, FieldValue};
use crate::domain::foundation::{ContentId, DomainError};

/// Current stock level of a product and the revision it was read at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockSnapshot {
    pub stock: u64,
    pub revision: u64,
}

/// Result of a conditional stock write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasOutcome {
    /// The write was applied; carries the new revision.
    Applied { revision: u64 },
    /// Someone else wrote first; carries the revision now stored.
    Stale { current_revision: u64 },
}

impl CasOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, CasOutcome::Applied { .. })
    }
}

/// Write access to content items.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Inserts or replaces an item.
    async fn save(&self, item: &ContentItem) -> Result<(), DomainError>;

    /// Replaces one custom field.
    ///
    /// Returns `ContentNotFound` if the item does not exist.
    async fn update_field(
        &self,
        id: ContentId,
        name: &str,
        value: FieldValue,
    ) -> Result<(), DomainError>;

    /// Reads a product's stock level.
    ///
    /// Returns `Ok(None)` if no item has this id, `NotAProduct` if the item
    /// is not a product, and a validation error if the stored value is
    /// not a non-negative integer.
    async fn read_stock(&self, id: ContentId) -> Result<Option<StockSnapshot>, DomainError>;

    /// Writes `stock` only if the item is still at `expected_revision`.
    async fn compare_and_set_stock(
        &self,
        id: ContentId,
        expected_revision: u64,
        stock: u64,
    ) -> Result<CasOutcome, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cas_outcome_reports_application() {
        assert!(CasOutcome::Applied { revision: 2 }.is_applied());
        assert!(!CasOutcome::Stale { current_revision: 3 }.is_applied());
    }

    #[test]
    fn content_repository_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ContentRepository>();
    }
}
