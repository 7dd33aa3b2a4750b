//! HTTP adapter for the stock endpoint.
//!
//! - `POST /api/custom/v1/stock` - Decrement stock (Basic-Auth)

pub mod dto;
pub mod handlers;

pub use handlers::{update_stock, StockAppState};
