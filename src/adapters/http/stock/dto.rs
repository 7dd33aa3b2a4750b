//! HTTP DTOs for the stock endpoint.

use serde::Deserialize;

use crate::application::handlers::content::UpdateStockCommand;
use crate::domain::content::StockAdjustment;

/// Body of `POST /stock`.
///
/// ```json
/// {"products": [{"id": 12, "quantity": 1}]}
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStockRequest {
    #[serde(default)]
    pub products: Vec<StockAdjustment>,
}

impl UpdateStockRequest {
    /// Parses a raw body. `None` for empty or malformed input.
    pub fn parse(body: &[u8]) -> Option<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return None;
        }
        serde_json::from_slice(body).ok()
    }
}

impl From<UpdateStockRequest> for UpdateStockCommand {
    fn from(request: UpdateStockRequest) -> Self {
        UpdateStockCommand {
            adjustments: request.products,
        }
    }
}
