//! Authentication adapters - implementations of the `UserDirectory` port.
//!
//! - `InMemoryUserDirectory` - Argon2-hashed users from configuration

mod in_memory_directory;

pub use in_memory_directory::{hash_password, InMemoryUserDirectory};
