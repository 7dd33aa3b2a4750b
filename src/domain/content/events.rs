//! Events emitted by the content domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ContentItem, ContentKind};
use crate::domain::foundation::ContentId;

/// A content item was published. Sent to the build hook so the static
/// front end can be rebuilt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPublished {
    pub event_id: Uuid,
    pub content_id: ContentId,
    pub kind: ContentKind,
    pub title: String,
    pub published_at: DateTime<Utc>,
}

impl ContentPublished {
    pub fn from_item(item: &ContentItem) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            content_id: item.id,
            kind: item.kind,
            title: item.title.clone(),
            published_at: item.published_at.unwrap_or(item.modified_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_item_copies_identity() {
        let item = ContentItem::new(ContentId::new(8), ContentKind::Post, "Launch")
            .unwrap()
            .published(Utc::now());
        let event = ContentPublished::from_item(&item);

        assert_eq!(event.content_id, ContentId::new(8));
        assert_eq!(event.kind, ContentKind::Post);
        assert_eq!(event.title, "Launch");
        assert_eq!(Some(event.published_at), item.published_at);
    }

    #[test]
    fn each_event_gets_a_fresh_id() {
        let item = ContentItem::new(ContentId::new(8), ContentKind::Post, "Launch").unwrap();
        assert_ne!(
            ContentPublished::from_item(&item).event_id,
            ContentPublished::from_item(&item).event_id
        );
    }
}
