//! The content item aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ContentKind, CustomFields, FieldValue, PublishStatus};
use crate::domain::foundation::{ContentId, ValidationError};

/// A unit of content: a post, a product or a brand.
///
/// Items are created and edited outside this service; the API reads them
/// and only ever mutates custom fields (stock) or publishing state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ContentId,
    pub kind: ContentKind,
    pub title: String,
    /// HTML body.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub status: PublishStatus,
    /// Category labels, in display order.
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default = "Utc::now")]
    pub modified_at: DateTime<Utc>,
    #[serde(default)]
    pub fields: CustomFields,
}

impl ContentItem {
    /// Creates a draft item with no body, categories or fields.
    pub fn new(
        id: ContentId,
        kind: ContentKind,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(Self {
            id,
            kind,
            title,
            content: String::new(),
            status: PublishStatus::Draft,
            categories: Vec::new(),
            published_at: None,
            modified_at: Utc::now(),
            fields: CustomFields::new(),
        })
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_category(mut self, label: impl Into<String>) -> Self {
        self.categories.push(label.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Marks the item published at the given instant.
    pub fn published(mut self, at: DateTime<Utc>) -> Self {
        self.publish(at);
        self
    }

    /// Transitions to published. An existing publication date is kept.
    pub fn publish(&mut self, at: DateTime<Utc>) {
        self.status = PublishStatus::Published;
        if self.published_at.is_none() {
            self.published_at = Some(at);
        }
        self.modified_at = at;
    }

    pub fn is_published(&self) -> bool {
        self.status.is_published()
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Replaces a custom field and records the modification time.
    pub fn set_field(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
        self.modified_at = Utc::now();
    }
}
