//! In-memory content store.
//!
//! Implements both [`ContentReader`] and [`ContentRepository`] over a
//! single map guarded by a tokio `RwLock`. Suitable for a single-process
//! deployment seeded from a JSON file at startup.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::content::{parse_stock, stock_value, ContentItem, ContentKind, FieldValue};
use crate::domain::content::STOCK_FIELD;
use crate::domain::foundation::{ContentId, DomainError, ErrorCode};
use crate::ports::{CasOutcome, ContentReader, ContentRepository, StockSnapshot};

#[derive(Debug, Clone)]
struct StoredItem {
    item: ContentItem,
    revision: u64,
}

/// In-memory store for content items.
#[derive(Debug, Default)]
pub struct InMemoryContentStore {
    items: RwLock<HashMap<ContentId, StoredItem>>,
}

impl InMemoryContentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given items at revision 1.
    pub fn with_items(items: impl IntoIterator<Item = ContentItem>) -> Self {
        let items = items
            .into_iter()
            .map(|item| (item.id, StoredItem { item, revision: 1 }))
            .collect();
        Self {
            items: RwLock::new(items),
        }
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Current revision of an item.
    pub async fn revision(&self, id: ContentId) -> Option<u64> {
        self.items.read().await.get(&id).map(|s| s.revision)
    }
}

fn not_found(id: ContentId) -> DomainError {
    DomainError::new(ErrorCode::ContentNotFound, format!("Content {} not found", id))
        .with_detail("id", id.to_string())
}

#[async_trait]
impl ContentReader for InMemoryContentStore {
    async fn get(&self, id: ContentId) -> Result<Option<ContentItem>, DomainError> {
        Ok(self.items.read().await.get(&id).map(|s| s.item.clone()))
    }

    async fn list(&self, kind: ContentKind, limit: usize) -> Result<Vec<ContentItem>, DomainError> {
        let items = self.items.read().await;
        let mut matching: Vec<&ContentItem> = items
            .values()
            .map(|s| &s.item)
            .filter(|item| item.kind == kind && item.is_published())
            .collect();

        matching.sort_by_key(|item| (Reverse(item.published_at), item.id));

        Ok(matching.into_iter().take(limit).cloned().collect())
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentStore {
    async fn save(&self, item: &ContentItem) -> Result<(), DomainError> {
        let mut items = self.items.write().await;
        let revision = items.get(&item.id).map_or(1, |s| s.revision + 1);
        items.insert(
            item.id,
            StoredItem {
                item: item.clone(),
                revision,
            },
        );
        Ok(())
    }

    async fn update_field(
        &self,
        id: ContentId,
        name: &str,
        value: FieldValue,
    ) -> Result<(), DomainError> {
        let mut items = self.items.write().await;
        let stored = items.get_mut(&id).ok_or_else(|| not_found(id))?;
        stored.item.set_field(name, value);
        stored.revision += 1;
        Ok(())
    }

    async fn read_stock(&self, id: ContentId) -> Result<Option<StockSnapshot>, DomainError> {
        let items = self.items.read().await;
        let Some(stored) = items.get(&id) else {
            return Ok(None);
        };

        if stored.item.kind != ContentKind::Product {
            return Err(DomainError::new(
                ErrorCode::NotAProduct,
                format!("Content {} is a {}, not a product", id, stored.item.kind),
            ));
        }

        let stock = match stored.item.field(STOCK_FIELD) {
            None | Some(FieldValue::Null) => 0,
            Some(value) => parse_stock(value)?,
        };

        Ok(Some(StockSnapshot {
            stock,
            revision: stored.revision,
        }))
    }

    async fn compare_and_set_stock(
        &self,
        id: ContentId,
        expected_revision: u64,
        stock: u64,
    ) -> Result<CasOutcome, DomainError> {
        let mut items = self.items.write().await;
        let stored = items.get_mut(&id).ok_or_else(|| not_found(id))?;

        if stored.revision != expected_revision {
            return Ok(CasOutcome::Stale {
                current_revision: stored.revision,
            });
        }

        stored.item.set_field(STOCK_FIELD, stock_value(stock));
        stored.revision += 1;
        Ok(CasOutcome::Applied {
            revision: stored.revision,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn post(id: u64, day: u32) -> ContentItem {
        ContentItem::new(ContentId::new(id), ContentKind::Post, format!("Post {}", id))
            .unwrap()
            .published(Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap())
    }

    fn product(id: u64, stock: i64) -> ContentItem {
        ContentItem::new(ContentId::new(id), ContentKind::Product, format!("Watch {}", id))
            .unwrap()
            .with_field("stock", stock)
            .published(Utc::now())
    }

    #[tokio::test]
    async fn get_returns_any_status() {
        let draft = ContentItem::new(ContentId::new(1), ContentKind::Post, "Draft").unwrap();
        let store = InMemoryContentStore::with_items([draft]);

        let found = store.get(ContentId::new(1)).await.unwrap();
        assert_eq!(found.map(|i| i.title), Some("Draft".to_string()));
        assert!(store.get(ContentId::new(2)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_filters_kind_and_status_newest_first() {
        let draft = ContentItem::new(ContentId::new(9), ContentKind::Post, "Draft").unwrap();
        let store =
            InMemoryContentStore::with_items([post(1, 1), post(2, 3), post(3, 2), product(4, 1), draft]);

        let ids: Vec<u64> = store
            .list(ContentKind::Post, 100)
            .await
            .unwrap()
            .iter()
            .map(|i| i.id.as_u64())
            .collect();

        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[tokio::test]
    async fn list_respects_limit() {
        let store = InMemoryContentStore::with_items((1..=5).map(|d| post(d as u64, d)));
        assert_eq!(store.list(ContentKind::Post, 2).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn list_of_empty_store_is_empty() {
        let store = InMemoryContentStore::new();
        assert!(store.list(ContentKind::Product, 100).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_bumps_revision() {
        let store = InMemoryContentStore::new();
        let item = post(1, 1);
        store.save(&item).await.unwrap();
        assert_eq!(store.revision(item.id).await, Some(1));
        store.save(&item).await.unwrap();
        assert_eq!(store.revision(item.id).await, Some(2));
    }

    #[tokio::test]
    async fn update_field_on_missing_item_fails() {
        let store = InMemoryContentStore::new();
        let err = store
            .update_field(ContentId::new(1), "stock", FieldValue::Integer(1))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ContentNotFound);
    }

    #[tokio::test]
    async fn read_stock_rejects_non_products() {
        let store = InMemoryContentStore::with_items([post(1, 1)]);
        let err = store.read_stock(ContentId::new(1)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotAProduct);
    }

    #[tokio::test]
    async fn read_stock_defaults_missing_field_to_zero() {
        let bare = ContentItem::new(ContentId::new(2), ContentKind::Product, "Bare").unwrap();
        let store = InMemoryContentStore::with_items([bare]);
        let snapshot = store.read_stock(ContentId::new(2)).await.unwrap().unwrap();
        assert_eq!(snapshot.stock, 0);
    }

    #[tokio::test]
    async fn compare_and_set_applies_at_expected_revision() {
        let store = InMemoryContentStore::with_items([product(1, 10)]);
        let snapshot = store.read_stock(ContentId::new(1)).await.unwrap().unwrap();

        let outcome = store
            .compare_and_set_stock(ContentId::new(1), snapshot.revision, 7)
            .await
            .unwrap();

        assert_eq!(outcome, CasOutcome::Applied { revision: 2 });
        let after = store.read_stock(ContentId::new(1)).await.unwrap().unwrap();
        assert_eq!(after.stock, 7);
    }

    #[tokio::test]
    async fn compare_and_set_rejects_stale_revision() {
        let store = InMemoryContentStore::with_items([product(1, 10)]);
        store
            .update_field(ContentId::new(1), "colour", FieldValue::from("red"))
            .await
            .unwrap();

        let outcome = store
            .compare_and_set_stock(ContentId::new(1), 1, 0)
            .await
            .unwrap();

        assert_eq!(outcome, CasOutcome::Stale { current_revision: 2 });
        let after = store.read_stock(ContentId::new(1)).await.unwrap().unwrap();
        assert_eq!(after.stock, 10);
    }
}
