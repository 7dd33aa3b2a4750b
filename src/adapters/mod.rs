//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory content store and JSON seed loader
//! - `auth` - Argon2-backed user directory
//! - `build_hook` - Build hook notifiers (HTTP, queued, recording)
//! - `http` - axum REST API

pub mod auth;
pub mod build_hook;
pub mod http;
pub mod memory;

pub use auth::InMemoryUserDirectory;
pub use build_hook::{BuildHookWorker, HttpBuildHook, QueuedBuildNotifier, RecordingBuildNotifier};
pub use memory::InMemoryContentStore;
