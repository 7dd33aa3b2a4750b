//! Recording build notifier.
//!
//! Keeps every event it is handed, so callers can assert on what would
//! have been sent to the build hook. Optionally fails every delivery.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::content::ContentPublished;
use crate::domain::foundation::ContentId;
use crate::ports::{BuildNotifier, NotifyError};

#[derive(Debug, Default)]
pub struct RecordingBuildNotifier {
    events: Mutex<Vec<ContentPublished>>,
    attempts: Mutex<usize>,
    force_error: Option<NotifyError>,
}

impl RecordingBuildNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every delivery fails with `error`.
    pub fn failing(error: NotifyError) -> Self {
        Self {
            force_error: Some(error),
            ..Self::default()
        }
    }

    /// Events delivered so far.
    pub fn events(&self) -> Vec<ContentPublished> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn delivered_ids(&self) -> Vec<ContentId> {
        self.events().iter().map(|e| e.content_id).collect()
    }

    /// Calls to `notify`, successful or not.
    pub fn attempt_count(&self) -> usize {
        self.attempts.lock().map(|a| *a).unwrap_or_default()
    }
}

#[async_trait]
impl BuildNotifier for RecordingBuildNotifier {
    async fn notify(&self, event: &ContentPublished) -> Result<(), NotifyError> {
        if let Ok(mut attempts) = self.attempts.lock() {
            *attempts += 1;
        }
        if let Some(error) = &self.force_error {
            return Err(error.clone());
        }

        tracing::debug!(
            event_id = %event.event_id,
            content_id = %event.content_id,
            "Recorded build notification"
        );
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::{ContentItem, ContentKind};

    #[tokio::test]
    async fn records_events_in_order() {
        let notifier = RecordingBuildNotifier::new();
        for id in [3, 1] {
            let item = ContentItem::new(ContentId::new(id), ContentKind::Post, "x").unwrap();
            notifier.notify(&ContentPublished::from_item(&item)).await.unwrap();
        }
        assert_eq!(notifier.delivered_ids(), vec![ContentId::new(3), ContentId::new(1)]);
        assert_eq!(notifier.attempt_count(), 2);
    }
}
