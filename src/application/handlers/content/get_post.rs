//! GetPostHandler - Query handler for a single post.
//!
//! Lookups are scoped to posts: an id that belongs to a product or brand
//! yields `None`, the same as an id that does not exist.

use std::sync::Arc;

use crate::domain::content::{ContentError, ContentKind};
use crate::domain::foundation::ContentId;
use crate::ports::ContentReader;

use super::PostView;

#[derive(Debug, Clone, Copy)]
pub struct GetPostQuery {
    pub id: ContentId,
}

pub type GetPostResult = Option<PostView>;

/// Kind-scoped on purpose: a product or brand id is not served as a post.
pub struct GetPostHandler {
    reader: Arc<dyn ContentReader>,
}

impl GetPostHandler {
    pub fn new(reader: Arc<dyn ContentReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetPostQuery) -> Result<GetPostResult, ContentError> {
        let post = self
            .reader
            .get(query.id)
            .await?
            .filter(|item| item.kind == ContentKind::Post);

        Ok(post.map(PostView::from_item))
    }
}
