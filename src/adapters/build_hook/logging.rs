//! Build notifier used when no hook URL is configured.

use async_trait::async_trait;

use crate::domain::content::ContentPublished;
use crate::ports::{BuildNotifier, NotifyError};

/// Logs publish events instead of delivering them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingBuildNotifier;

#[async_trait]
impl BuildNotifier for LoggingBuildNotifier {
    async fn notify(&self, event: &ContentPublished) -> Result<(), NotifyError> {
        tracing::info!(
            event_id = %event.event_id,
            content_id = %event.content_id,
            title = %event.title,
            "Build hook disabled, publish event not delivered"
        );
        Ok(())
    }
}
