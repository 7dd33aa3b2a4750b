//! Content handlers.
//!
//! ## Queries
//! - List published posts / products
//! - Get a post / product by id
//!
//! ## Commands
//! - Decrement product stock
//! - Publish content (and notify the build hook for posts)

mod get_post;
mod get_product;
mod list_posts;
mod list_products;
mod publish_content;
mod update_stock;
mod views;

pub use views::{BrandSummary, PostView, ProductFieldsView, ProductView};

// Queries
pub use get_post::{GetPostHandler, GetPostQuery, GetPostResult};
pub use get_product::{GetProductHandler, GetProductQuery, GetProductResult};
pub use list_posts::{ListPostsHandler, ListPostsQuery, ListPostsResult};
pub use list_products::{ListProductsHandler, ListProductsQuery, ListProductsResult};

// Commands
pub use publish_content::{PublishContentCommand, PublishContentHandler, PublishContentResult};
pub use update_stock::{
    UpdateStockCommand, UpdateStockHandler, UpdateStockResult, DEFAULT_MAX_ATTEMPTS,
};
