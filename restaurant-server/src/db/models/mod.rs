//! Database Models

// Serde helpers
pub mod serde_helpers;

pub mod dining_table;
pub mod order;
pub mod restaurant;

// Re-exports
pub use dining_table::DiningTableRecord;
pub use order::OrderStatusRow;
pub use restaurant::RestaurantRecord;
