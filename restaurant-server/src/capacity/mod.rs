//! 容量统计模块
//!
//! Keeps the derived `total_capacity` / `customer_count` counters of a
//! restaurant in sync with its tables and active orders.
//!
//! - [`RestaurantStore`] - persistence seam: load a restaurant with its tables
//!   and non-completed orders, save the record back
//! - [`CapacityAggregator`] - recomputes and persists the counters

mod aggregator;


pub use aggregator::CapacityAggregator;

use async_trait::async_trait;
use shared::models::{OrderStatus, Restaurant};

use crate::db::repository::RepoResult;

/// An order reference as seen by the aggregator
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveOrder {
    pub id: String,
    pub status: OrderStatus,
}

/// One dining table with the orders still attached to it
#[derive(Debug, Clone, PartialEq)]
pub struct TableOrders {
    pub table_id: String,
    pub orders: Vec<ActiveOrder>,
}

/// A restaurant expanded with its tables and their active orders
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantWithActiveOrders {
    pub restaurant: Restaurant,
    pub tables: Vec<TableOrders>,
}

/// Persistence operations the aggregator needs
///
/// Implementations resolve table references that still exist and may drop
/// completed orders while loading; the aggregator filters again either way.
#[async_trait]
pub trait RestaurantStore: Send + Sync {
    /// All restaurant ids, in a stable order
    async fn list_ids(&self) -> RepoResult<Vec<String>>;

    /// Load a restaurant with its tables and non-completed orders.
    /// Returns `Ok(None)` when no restaurant has this id.
    async fn load_with_active_orders(
        &self,
        id: &str,
    ) -> RepoResult<Option<RestaurantWithActiveOrders>>;

    /// Persist the restaurant record, including both derived counters
    async fn save(&self, restaurant: &Restaurant) -> RepoResult<()>;
}
