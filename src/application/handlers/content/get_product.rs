//! GetProductHandler - Query handler for a single product.

use std::sync::Arc;

use crate::domain::content::{ContentError, ContentKind};
use crate::domain::foundation::ContentId;
use crate::ports::ContentReader;

use super::views::product_view;
use super::ProductView;

#[derive(Debug, Clone, Copy)]
pub struct GetProductQuery {
    pub id: ContentId,
}

/// `None` if the id is unknown or not a product.
pub type GetProductResult = Option<ProductView>;

/// Kind-scoped on purpose: a post or brand id is not served as a product.
pub struct GetProductHandler {
    reader: Arc<dyn ContentReader>,
}

impl GetProductHandler {
    pub fn new(reader: Arc<dyn ContentReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetProductQuery) -> Result<GetProductResult, ContentError> {
        let Some(item) = self
            .reader
            .get(query.id)
            .await?
            .filter(|item| item.kind == ContentKind::Product)
        else {
            return Ok(None);
        };

        product_view(self.reader.as_ref(), item).await.map(Some)
    }
}
