//! HTTP handlers for content endpoints.
//!
//! Read-only. Missing items and empty collections are `null` with 200,
//! never an error.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::extract::rejection::PathRejection;
use axum::Json;

use crate::application::handlers::content::{
    GetPostHandler, GetPostQuery, GetProductHandler, GetProductQuery, ListPostsHandler,
    ListPostsQuery, ListProductsHandler, ListProductsQuery,
};
use crate::ports::ContentReader;

use super::super::error::ApiError;
use super::dto::{collection, parse_id, PostResponse, ProductResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// State for content endpoints.
#[derive(Clone)]
pub struct ContentAppState {
    pub reader: Arc<dyn ContentReader>,
    /// Maximum items per collection response.
    pub page_size: usize,
}

impl ContentAppState {
    pub fn new(reader: Arc<dyn ContentReader>, page_size: usize) -> Self {
        Self { reader, page_size }
    }

    pub fn list_posts_handler(&self) -> ListPostsHandler {
        ListPostsHandler::new(self.reader.clone())
    }

    pub fn get_post_handler(&self) -> GetPostHandler {
        GetPostHandler::new(self.reader.clone())
    }

    pub fn list_products_handler(&self) -> ListProductsHandler {
        ListProductsHandler::new(self.reader.clone())
    }

    pub fn get_product_handler(&self) -> GetProductHandler {
        GetProductHandler::new(self.reader.clone())
    }
}

fn id_segment(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    path.map(|Path(raw)| raw).map_err(|_| ApiError::no_route())
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/custom/v1/posts/ - List published posts
pub async fn list_posts(
    State(state): State<ContentAppState>,
) -> Result<Json<Option<Vec<PostResponse>>>, ApiError> {
    let query = ListPostsQuery {
        limit: state.page_size,
    };
    let posts = state.list_posts_handler().handle(query).await?;
    Ok(Json(collection(posts)))
}

/// GET /api/custom/v1/posts/:id - Get a post
pub async fn get_post(
    State(state): State<ContentAppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Option<PostResponse>>, ApiError> {
    let id = parse_id(&id_segment(path)?)?;
    let post = state.get_post_handler().handle(GetPostQuery { id }).await?;
    Ok(Json(post))
}

/// GET /api/custom/v1/products/ - List published products
pub async fn list_products(
    State(state): State<ContentAppState>,
) -> Result<Json<Option<Vec<ProductResponse>>>, ApiError> {
    let query = ListProductsQuery {
        limit: state.page_size,
    };
    let products = state.list_products_handler().handle(query).await?;
    Ok(Json(collection(products)))
}

/// GET /api/custom/v1/products/:id - Get a product
pub async fn get_product(
    State(state): State<ContentAppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Option<ProductResponse>>, ApiError> {
    let id = parse_id(&id_segment(path)?)?;
    let product = state
        .get_product_handler()
        .handle(GetProductQuery { id })
        .await?;
    Ok(Json(product))
}
