//! Queued build hook delivery.
//!
//! Publishing must not wait on the build hook. [`QueuedBuildNotifier`]
//! implements [`BuildNotifier`] by pushing onto a bounded channel and
//! returning at once; [`BuildHookWorker`] drains the channel in a
//! background task and hands each event to the real notifier (which
//! owns the retry policy).
//!
//! ## Graceful Shutdown
//!
//! The worker listens on a `watch` channel. When signalled it delivers
//! everything already queued, then returns.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, watch};

use crate::domain::content::ContentPublished;
use crate::ports::{BuildNotifier, NotifyError};

/// Sending half: enqueue events without blocking.
#[derive(Clone)]
pub struct QueuedBuildNotifier {
    sender: mpsc::Sender<ContentPublished>,
}

/// Receiving half: delivers queued events one at a time.
pub struct BuildHookWorker {
    receiver: mpsc::Receiver<ContentPublished>,
    delivery: Arc<dyn BuildNotifier>,
}

/// Creates a connected notifier/worker pair with the given queue capacity.
pub fn build_hook_queue(
    delivery: Arc<dyn BuildNotifier>,
    capacity: usize,
) -> (QueuedBuildNotifier, BuildHookWorker) {
    let (sender, receiver) = mpsc::channel(capacity.max(1));
    (
        QueuedBuildNotifier { sender },
        BuildHookWorker { receiver, delivery },
    )
}

#[async_trait]
impl BuildNotifier for QueuedBuildNotifier {
    async fn notify(&self, event: &ContentPublished) -> Result<(), NotifyError> {
        self.sender.try_send(event.clone()).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => NotifyError::QueueFull,
            mpsc::error::TrySendError::Closed(_) => NotifyError::QueueClosed,
        })
    }
}

impl BuildHookWorker {
    /// Runs until shutdown is signalled or every notifier handle is dropped.
    ///
    /// Returns the number of events delivered successfully.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> usize {
        let mut delivered = 0;

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
                next = self.receiver.recv() => {
                    match next {
                        Some(event) => {
                            if self.deliver(&event).await {
                                delivered += 1;
                            }
                        }
                        None => return delivered,
                    }
                }
            }
        }

        self.receiver.close();
        while let Some(event) = self.receiver.recv().await {
            if self.deliver(&event).await {
                delivered += 1;
            }
        }
        tracing::info!(delivered, "Build hook worker stopped");
        delivered
    }

    async fn deliver(&self, event: &ContentPublished) -> bool {
        match self.delivery.notify(event).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    event_id = %event.event_id,
                    content_id = %event.content_id,
                    error = %e,
                    "Dropping build notification"
                );
                false
            }
        }
    }
}
