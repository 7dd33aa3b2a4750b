//! BuildNotifier port - tells the static front end to rebuild.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::content::ContentPublished;

/// Errors from delivering a build notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    /// The request never got a response (DNS, connect, timeout).
    #[error("Build hook transport error: {0}")]
    Transport(String),

    /// The hook answered with a non-success status.
    #[error("Build hook rejected notification with status {status}")]
    Rejected { status: u16 },

    /// The delivery queue is at capacity.
    #[error("Build hook queue is full")]
    QueueFull,

    /// The delivery worker has stopped.
    #[error("Build hook queue is closed")]
    QueueClosed,
}

impl NotifyError {
    /// Whether another attempt may succeed: transport errors, 429 and 5xx.
    pub fn is_retryable(&self) -> bool {
        match self {
            NotifyError::Transport(_) => true,
            NotifyError::Rejected { status } => *status == 429 || *status >= 500,
            NotifyError::QueueFull | NotifyError::QueueClosed => false,
        }
    }
}

/// Delivers publish notifications to the build hook.
#[async_trait]
pub trait BuildNotifier: Send + Sync {
    async fn notify(&self, event: &ContentPublished) -> Result<(), NotifyError>;
}
