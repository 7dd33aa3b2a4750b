//! Content kinds and publishing status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The type of a content item.
///
/// `Brand` items are never exposed directly; products reference them
/// through their `brand` custom field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Post,
    Product,
    Brand,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Post => "post",
            ContentKind::Product => "product",
            ContentKind::Brand => "brand",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Publishing status of a content item.
///
/// Listings only include published items; lookups by id ignore status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    #[default]
    Draft,
    Published,
}

impl PublishStatus {
    pub fn is_published(&self) -> bool {
        matches!(self, PublishStatus::Published)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ContentKind::Product).unwrap(), "\"product\"");
        let kind: ContentKind = serde_json::from_str("\"brand\"").unwrap();
        assert_eq!(kind, ContentKind::Brand);
    }

    #[test]
    fn status_defaults_to_draft() {
        assert_eq!(PublishStatus::default(), PublishStatus::Draft);
        assert!(!PublishStatus::Draft.is_published());
        assert!(PublishStatus::Published.is_published());
    }
}
