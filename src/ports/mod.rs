//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Content Store Ports
//!
//! - `ContentReader` - get-by-id and list-by-kind
//! - `ContentRepository` - save, update-field and stock compare-and-set
//!
//! ## Collaborator Ports
//!
//! - `UserDirectory` - Basic-Auth credential verification
//! - `BuildNotifier` - Build hook delivery on publish

mod build_notifier;
mod content_reader;
mod content_repository;
mod user_directory;

pub use build_notifier::{BuildNotifier, NotifyError};
pub use content_reader::ContentReader;
pub use content_repository::{CasOutcome, ContentRepository, StockSnapshot};
pub use user_directory::UserDirectory;
