//! HTTP handler for the stock endpoint.
//!
//! Runs behind `basic_auth_middleware`, so by the time the body is read
//! the caller is known. The response is `true` whenever the payload was
//! accepted; per-item outcomes are logged, not returned.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use crate::application::handlers::content::{UpdateStockCommand, UpdateStockHandler};
use crate::ports::ContentRepository;

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::dto::UpdateStockRequest;

/// State for the stock endpoint.
#[derive(Clone)]
pub struct StockAppState {
    pub repository: Arc<dyn ContentRepository>,
    /// Compare-and-set attempts per product before giving up.
    pub max_attempts: u32,
}

impl StockAppState {
    pub fn new(repository: Arc<dyn ContentRepository>, max_attempts: u32) -> Self {
        Self {
            repository,
            max_attempts,
        }
    }

    pub fn update_stock_handler(&self) -> UpdateStockHandler {
        UpdateStockHandler::new(self.repository.clone()).with_max_attempts(self.max_attempts)
    }
}

/// POST /api/custom/v1/stock - Decrement stock for the listed products
pub async fn update_stock(
    State(state): State<StockAppState>,
    RequireAuth(user): RequireAuth,
    body: Bytes,
) -> Result<Json<bool>, ApiError> {
    let request = UpdateStockRequest::parse(&body).ok_or_else(ApiError::invalid_payload)?;
    let cmd = UpdateStockCommand::from(request);

    tracing::info!(
        username = %user.username,
        entries = cmd.adjustments.len(),
        "Stock update requested"
    );

    state.update_stock_handler().handle(cmd).await?;
    Ok(Json(true))
}
