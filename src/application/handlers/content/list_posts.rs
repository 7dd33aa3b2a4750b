//! ListPostsHandler - Query handler for the post collection.

use std::sync::Arc;

use crate::domain::content::{ContentError, ContentKind};
use crate::ports::ContentReader;

use super::PostView;

/// Query for published posts.
#[derive(Debug, Clone, Copy)]
pub struct ListPostsQuery {
    /// Maximum number of posts to return.
    pub limit: usize,
}

/// Posts newest first. Empty when nothing is published.
pub type ListPostsResult = Vec<PostView>;

pub struct ListPostsHandler {
    reader: Arc<dyn ContentReader>,
}

impl ListPostsHandler {
    pub fn new(reader: Arc<dyn ContentReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: ListPostsQuery) -> Result<ListPostsResult, ContentError> {
        let posts = self.reader.list(ContentKind::Post, query.limit).await?;
        tracing::debug!(count = posts.len(), "Listed posts");
        Ok(posts.into_iter().map(PostView::from_item).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryContentStore;
    use crate::domain::content::ContentItem;
    use crate::domain::foundation::ContentId;
    use chrono::{TimeZone, Utc};

    fn post(id: u64, day: u32) -> ContentItem {
        ContentItem::new(ContentId::new(id), ContentKind::Post, format!("Post {}", id))
            .unwrap()
            .published(Utc.with_ymd_and_hms(2024, 2, day, 0, 0, 0).unwrap())
    }

    #[tokio::test]
    async fn returns_empty_when_no_posts() {
        let handler = ListPostsHandler::new(Arc::new(InMemoryContentStore::new()));
        let posts = handler.handle(ListPostsQuery { limit: 100 }).await.unwrap();
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn returns_newest_first_within_limit() {
        let store = InMemoryContentStore::with_items([post(1, 1), post(2, 5), post(3, 3)]);
        let handler = ListPostsHandler::new(Arc::new(store));

        let posts = handler.handle(ListPostsQuery { limit: 2 }).await.unwrap();

        let ids: Vec<u64> = posts.iter().map(|p| p.id.as_u64()).collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
