//! In-memory content store adapter and its JSON seed loader.

mod content_store;
mod seed;

pub use content_store::InMemoryContentStore;
pub use seed::{load_seed_file, parse_seed};
