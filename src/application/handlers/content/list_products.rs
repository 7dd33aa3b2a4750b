//! ListProductsHandler - Query handler for the product collection.
//!
//! Each product's brand reference is resolved once per brand, so a page
//! of products from the same manufacturer costs a single brand lookup.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::content::{ContentError, ContentKind};
use crate::domain::foundation::ContentId;
use crate::ports::ContentReader;

use super::views::{brand_reference, resolve_brand, BrandSummary};
use super::ProductView;

#[derive(Debug, Clone, Copy)]
pub struct ListProductsQuery {
    pub limit: usize,
}

pub type ListProductsResult = Vec<ProductView>;

pub struct ListProductsHandler {
    reader: Arc<dyn ContentReader>,
}

impl ListProductsHandler {
    pub fn new(reader: Arc<dyn ContentReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: ListProductsQuery,
    ) -> Result<ListProductsResult, ContentError> {
        let products = self.reader.list(ContentKind::Product, query.limit).await?;
        let mut brands: HashMap<ContentId, Option<BrandSummary>> = HashMap::new();
        let mut views = Vec::with_capacity(products.len());

        for product in products {
            let brand = match brand_reference(&product) {
                None => None,
                Some(reference) => match brands.get(&reference.id) {
                    Some(cached) => cached.clone(),
                    None => {
                        let resolved = resolve_brand(self.reader.as_ref(), Some(reference)).await?;
                        brands.insert(reference.id, resolved.clone());
                        resolved
                    }
                },
            };

            views.push(ProductView::from_item(product, brand));
        }

        tracing::debug!(count = views.len(), brands = brands.len(), "Listed products");
        Ok(views)
    }
}
