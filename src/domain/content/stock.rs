//! Stock decrement rules.

use serde::Deserialize;

use crate::domain::foundation::ContentId;

/// One line of a stock update: sell `quantity` units of product `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StockAdjustment {
    pub id: ContentId,
    pub quantity: u32,
}

impl StockAdjustment {
    pub fn new(id: ContentId, quantity: u32) -> Self {
        Self { id, quantity }
    }
}

/// Outcome of applying a decrement to a stock level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockChange {
    pub id: ContentId,
    pub previous: u64,
    pub current: u64,
    /// Units requested beyond what was on hand. Non-zero means the
    /// level was clamped at zero.
    pub shortfall: u64,
}

impl StockChange {
    /// Decrements `previous` by `quantity`, saturating at zero.
    pub fn decrement(id: ContentId, previous: u64, quantity: u32) -> Self {
        let quantity = u64::from(quantity);
        let current = previous.saturating_sub(quantity);
        Self {
            id,
            previous,
            current,
            shortfall: quantity.saturating_sub(previous),
        }
    }

    pub fn is_oversold(&self) -> bool {
        self.shortfall > 0
    }
}
