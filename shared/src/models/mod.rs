//! Data models
//!
//! Shared between restaurant-server and API clients.
//! All ids are SurrealDB record ids in `table:key` string form.

pub mod order;
pub mod restaurant;

// Re-exports
pub use order::*;
pub use restaurant::*;
