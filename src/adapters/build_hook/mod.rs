//! Build hook adapters - implementations of the `BuildNotifier` port.
//!
//! - `HttpBuildHook` - reqwest client with bounded exponential retry
//! - `QueuedBuildNotifier` / `BuildHookWorker` - non-blocking queue in front of it
//! - `LoggingBuildNotifier` - logs events when no hook is configured
//! - `RecordingBuildNotifier` - keeps events in memory

mod http_build_hook;
mod logging;
mod queued;
mod recording;

pub use http_build_hook::{sign_payload, HttpBuildHook, HttpBuildHookConfig};
pub use logging::LoggingBuildNotifier;
pub use queued::{build_hook_queue, BuildHookWorker, QueuedBuildNotifier};
pub use recording::RecordingBuildNotifier;
