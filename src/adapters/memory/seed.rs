//! Seed file loading for the in-memory store.
//!
//! The seed file is a JSON document of the form:
//!
//! ```json
//! {
//!   "items": [
//!     {"id": 1, "kind": "post", "title": "Hello", "status": "published",
//!      "categories": ["News"], "fields": {"subtitle": "First"}},
//!     {"id": 3, "kind": "brand", "title": "Acme", "status": "published"},
//!     {"id": 10, "kind": "product", "title": "Watch", "status": "published",
//!      "fields": {"stock": 10, "price": 199.0,
//!                 "brand": {"post_type": "brand", "id": 3}}}
//!   ]
//! }
//! ```

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::domain::content::{ContentItem, ContentKind, ProductFields};
use crate::domain::foundation::{DomainError, ErrorCode};

use super::InMemoryContentStore;

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    items: Vec<ContentItem>,
}

/// Parses seed JSON, rejecting duplicate ids and malformed product fields.
pub fn parse_seed(json: &str) -> Result<Vec<ContentItem>, DomainError> {
    let seed: SeedFile = serde_json::from_str(json).map_err(|e| {
        DomainError::new(ErrorCode::SeedError, format!("Invalid seed JSON: {}", e))
    })?;

    let mut seen = HashSet::new();
    for item in &seed.items {
        if !seen.insert(item.id) {
            return Err(DomainError::new(
                ErrorCode::SeedError,
                format!("Duplicate content id {} in seed", item.id),
            ));
        }
        if item.kind == ContentKind::Product {
            ProductFields::from_fields(&item.fields).map_err(|e| {
                DomainError::new(
                    ErrorCode::SeedError,
                    format!("Product {} has invalid fields: {}", item.id, e),
                )
            })?;
        }
    }

    Ok(seed.items)
}

/// Reads a seed file and builds a store from it.
pub fn load_seed_file(path: &Path) -> Result<InMemoryContentStore, DomainError> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        DomainError::new(
            ErrorCode::SeedError,
            format!("Cannot read seed file {}: {}", path.display(), e),
        )
    })?;

    let items = parse_seed(&json)?;
    tracing::info!(path = %path.display(), items = items.len(), "Loaded content seed");
    Ok(InMemoryContentStore::with_items(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ContentId;
    use crate::ports::ContentReader;
    use std::io::Write;

    const SEED: &str = r#"{
        "items": [
            {"id": 1, "kind": "post", "title": "Hello", "status": "published",
             "published_at": "2024-03-01T10:00:00Z", "categories": ["News"]},
            {"id": 3, "kind": "brand", "title": "Acme", "status": "published"},
            {"id": 10, "kind": "product", "title": "Watch", "status": "published",
             "fields": {"stock": 10, "price": 199.0, "brand": {"post_type": "brand", "id": 3}}}
        ]
    }"#;

    #[test]
    fn parses_items() {
        let items = parse_seed(SEED).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].categories, vec!["News".to_string()]);
    }

    #[test]
    fn empty_document_has_no_items() {
        assert!(parse_seed("{}").unwrap().is_empty());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"{"items": [
            {"id": 1, "kind": "post", "title": "A"},
            {"id": 1, "kind": "post", "title": "B"}
        ]}"#;
        let err = parse_seed(json).unwrap_err();
        assert_eq!(err.code, ErrorCode::SeedError);
        assert!(err.message.contains("Duplicate"));
    }

    #[test]
    fn rejects_negative_product_stock() {
        let json = r#"{"items": [
            {"id": 1, "kind": "product", "title": "A", "fields": {"stock": -1}}
        ]}"#;
        assert!(parse_seed(json).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert_eq!(parse_seed("{").unwrap_err().code, ErrorCode::SeedError);
    }

    #[tokio::test]
    async fn loads_store_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SEED.as_bytes()).unwrap();

        let store = load_seed_file(file.path()).unwrap();

        assert_eq!(store.len().await, 3);
        let product = store.get(ContentId::new(10)).await.unwrap().unwrap();
        assert_eq!(product.title, "Watch");
    }

    #[test]
    fn missing_file_is_seed_error() {
        let err = load_seed_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert_eq!(err.code, ErrorCode::SeedError);
    }
}
