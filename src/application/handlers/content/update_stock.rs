//! UpdateStockHandler - Command handler for decrementing product stock.
//!
//! Each adjustment is applied on its own: read the current stock and its
//! revision, compute the decremented level, then compare-and-set. When
//! another writer got there first the entry is re-read and retried, up to
//! `max_attempts` times.
//!
//! Stock never goes below zero. A decrement larger than the stock on hand
//! empties it and the shortfall is logged as an oversell.
//!
//! Entries for unknown ids, non-products, or products whose stored stock
//! is unreadable are skipped. Nothing is rolled back across entries.

use std::sync::Arc;

use crate::domain::content::{ContentError, StockAdjustment, StockChange};
use crate::domain::foundation::{ContentId, DomainError, ErrorCode};
use crate::ports::{CasOutcome, ContentRepository};

/// Default number of compare-and-set attempts per entry.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Command to decrement stock for a batch of products.
#[derive(Debug, Clone)]
pub struct UpdateStockCommand {
    pub adjustments: Vec<StockAdjustment>,
}

/// What happened to each entry of the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateStockResult {
    /// Applied decrements, in request order.
    pub changes: Vec<StockChange>,
    /// Entries that were not products or could not be read.
    pub skipped: Vec<ContentId>,
    /// Entries that lost every compare-and-set race.
    pub conflicts: Vec<ContentId>,
}

enum EntryOutcome {
    Applied(StockChange),
    Skipped,
    Conflict,
}

pub struct UpdateStockHandler {
    repository: Arc<dyn ContentRepository>,
    max_attempts: u32,
}

impl UpdateStockHandler {
    pub fn new(repository: Arc<dyn ContentRepository>) -> Self {
        Self {
            repository,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub async fn handle(
        &self,
        cmd: UpdateStockCommand,
    ) -> Result<UpdateStockResult, ContentError> {
        if cmd.adjustments.is_empty() {
            return Err(ContentError::invalid_payload("products must not be empty"));
        }

        let mut result = UpdateStockResult::default();
        for adjustment in cmd.adjustments {
            match self.apply(adjustment).await? {
                EntryOutcome::Applied(change) => result.changes.push(change),
                EntryOutcome::Skipped => result.skipped.push(adjustment.id),
                EntryOutcome::Conflict => result.conflicts.push(adjustment.id),
            }
        }

        tracing::info!(
            applied = result.changes.len(),
            skipped = result.skipped.len(),
            conflicts = result.conflicts.len(),
            "Stock update processed"
        );
        Ok(result)
    }

    async fn apply(&self, adjustment: StockAdjustment) -> Result<EntryOutcome, ContentError> {
        let id = adjustment.id;

        for attempt in 1..=self.max_attempts {
            let snapshot = match self.repository.read_stock(id).await {
                Ok(Some(snapshot)) => snapshot,
                Ok(None) => {
                    tracing::warn!(product_id = %id, "Skipping stock update for unknown id");
                    return Ok(EntryOutcome::Skipped);
                }
                Err(err) if is_skippable(&err) => {
                    tracing::warn!(product_id = %id, error = %err, "Skipping stock update");
                    return Ok(EntryOutcome::Skipped);
                }
                Err(err) => return Err(err.into()),
            };

            let change = StockChange::decrement(id, snapshot.stock, adjustment.quantity);
            match self
                .repository
                .compare_and_set_stock(id, snapshot.revision, change.current)
                .await?
            {
                CasOutcome::Applied { .. } => {
                    if change.is_oversold() {
                        tracing::warn!(
                            product_id = %id,
                            previous = change.previous,
                            requested = adjustment.quantity,
                            shortfall = change.shortfall,
                            "Stock oversold, clamped to zero"
                        );
                    } else {
                        tracing::debug!(
                            product_id = %id,
                            previous = change.previous,
                            current = change.current,
                            "Stock decremented"
                        );
                    }
                    return Ok(EntryOutcome::Applied(change));
                }
                CasOutcome::Stale { current_revision } => {
                    tracing::debug!(
                        product_id = %id,
                        attempt,
                        expected = snapshot.revision,
                        current_revision,
                        "Stock changed concurrently, retrying"
                    );
                }
            }
        }

        tracing::error!(
            product_id = %id,
            attempts = self.max_attempts,
            "Giving up on stock update after repeated conflicts"
        );
        Ok(EntryOutcome::Conflict)
    }
}

fn is_skippable(err: &DomainError) -> bool {
    matches!(
        err.code,
        ErrorCode::NotAProduct | ErrorCode::InvalidFormat | ErrorCode::OutOfRange
    )
}
