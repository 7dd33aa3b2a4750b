//! Content store configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Content store and listing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    /// JSON seed file loaded at startup (`{"items": [...]}`)
    pub seed_path: Option<PathBuf>,

    /// Maximum items returned by a list endpoint
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Compare-and-set attempts per product on a stock update
    #[serde(default = "default_stock_attempts")]
    pub stock_update_attempts: u32,
}

impl ContentConfig {
    /// Validate content configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=1000).contains(&self.page_size) {
            return Err(ValidationError::InvalidPageSize);
        }
        if !(1..=50).contains(&self.stock_update_attempts) {
            return Err(ValidationError::InvalidStockAttempts);
        }
        Ok(())
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            page_size: default_page_size(),
            stock_update_attempts: default_stock_attempts(),
        }
    }
}

fn default_page_size() -> usize {
    100
}

fn default_stock_attempts() -> u32 {
    5
}
