//! PublishContentHandler - Command handler for publishing content.
//!
//! Marks an item published, stores it, and asks the build hook to rebuild
//! the site when the item is a post. Notification failures are logged and
//! never fail the publish.
//!
//! Products must carry readable product fields (integer stock of zero or
//! more, numeric price, brand reference) or the publish is refused.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::content::{
    ContentError, ContentItem, ContentKind, ContentPublished, ProductFields,
};
use crate::ports::{BuildNotifier, ContentRepository};

/// Command to publish an item, creating or replacing it in the store.
#[derive(Debug, Clone)]
pub struct PublishContentCommand {
    pub item: ContentItem,
    /// Publication time; defaults to now.
    pub at: Option<DateTime<Utc>>,
}

impl PublishContentCommand {
    pub fn new(item: ContentItem) -> Self {
        Self { item, at: None }
    }

    pub fn at(mut self, at: DateTime<Utc>) -> Self {
        self.at = Some(at);
        self
    }
}

/// Result of a successful publish.
#[derive(Debug, Clone)]
pub struct PublishContentResult {
    pub item: ContentItem,
    /// Event handed to the build notifier, if any.
    pub event: Option<ContentPublished>,
}

pub struct PublishContentHandler {
    repository: Arc<dyn ContentRepository>,
    notifier: Arc<dyn BuildNotifier>,
}

impl PublishContentHandler {
    pub fn new(repository: Arc<dyn ContentRepository>, notifier: Arc<dyn BuildNotifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    pub async fn handle(
        &self,
        cmd: PublishContentCommand,
    ) -> Result<PublishContentResult, ContentError> {
        let mut item = cmd.item;
        if item.kind == ContentKind::Product {
            ProductFields::from_fields(&item.fields).map_err(|e| {
                ContentError::invalid_payload(format!("product {}: {}", item.id, e))
            })?;
        }

        item.publish(cmd.at.unwrap_or_else(Utc::now));
        self.repository.save(&item).await?;

        tracing::info!(content_id = %item.id, kind = %item.kind, "Content published");

        if item.kind != ContentKind::Post {
            return Ok(PublishContentResult { item, event: None });
        }

        let event = ContentPublished::from_item(&item);
        if let Err(e) = self.notifier.notify(&event).await {
            tracing::warn!(
                content_id = %item.id,
                event_id = %event.event_id,
                error = %e,
                "Build hook notification not queued"
            );
        }

        Ok(PublishContentResult {
            item,
            event: Some(event),
        })
    }
}
