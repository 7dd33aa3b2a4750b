//! HTTP adapter for content endpoints.
//!
//! - `GET /api/custom/v1/posts/` - List published posts
//! - `GET /api/custom/v1/posts/:id` - Get a post
//! - `GET /api/custom/v1/products/` - List published products
//! - `GET /api/custom/v1/products/:id` - Get a product

pub mod dto;
pub mod handlers;

pub use handlers::{get_post, get_product, list_posts, list_products, ContentAppState};
