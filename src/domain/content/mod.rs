//! Content module - posts, products and brands.
//!
//! Items are owned by the content store; the API reads them, decrements
//! product stock and publishes them.

mod errors;
mod events;
mod field;
pub mod filters;
mod item;
mod kind;
mod product;
mod stock;

pub use errors::ContentError;
pub use events::ContentPublished;
pub use field::{ContentRef, CustomFields, FieldValue};
pub use item::ContentItem;
pub use kind::{ContentKind, PublishStatus};
pub use product::{
    parse_stock, stock_value, Currency, ProductFields, BRAND_FIELD, PRICE_FIELD, STOCK_FIELD,
};
pub use stock::{StockAdjustment, StockChange};
