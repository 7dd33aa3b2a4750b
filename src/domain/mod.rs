//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, credentials, errors)
//! - `content` - Content items, custom fields, product schema and stock rules

pub mod content;
pub mod foundation;
