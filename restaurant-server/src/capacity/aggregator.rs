//! Capacity aggregator
//!
//! Recomputes `total_capacity` (table count) and `customer_count` (orders not
//! yet completed) from scratch and writes them back onto the restaurant.

use std::sync::Arc;

use futures::future::try_join_all;
use shared::models::{CapacitySnapshot, Restaurant};

use super::{RestaurantStore, RestaurantWithActiveOrders};
use crate::db::repository::{RepoError, RepoResult};

#[derive(Clone)]
pub struct CapacityAggregator {
    store: Arc<dyn RestaurantStore>,
}

impl CapacityAggregator {
    pub fn new(store: Arc<dyn RestaurantStore>) -> Self {
        Self { store }
    }

    /// Count tables and non-completed orders
    pub fn compute(loaded: &RestaurantWithActiveOrders) -> CapacitySnapshot {
        let active_orders: usize = loaded
            .tables
            .iter()
            .map(|table| {
                table
                    .orders
                    .iter()
                    .filter(|order| !order.status.is_completed())
                    .count()
            })
            .sum();

        CapacitySnapshot {
            total_capacity: saturating_u32(loaded.tables.len()),
            customer_count: saturating_u32(active_orders),
        }
    }

    /// Recompute and persist the counters of one restaurant.
    ///
    /// Returns the refreshed record. Fails with [`RepoError::NotFound`] when
    /// the restaurant does not exist; nothing is written in that case.
    pub async fn recompute(&self, id: &str) -> RepoResult<Restaurant> {
        let loaded = self
            .store
            .load_with_active_orders(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Restaurant {} not found", id)))?;

        let snapshot = Self::compute(&loaded);
        let previous = loaded.restaurant.capacity();
        let mut restaurant = loaded.restaurant;
        restaurant.apply_capacity(snapshot);
        self.store.save(&restaurant).await?;

        tracing::debug!(
            restaurant = %restaurant.id,
            total_capacity = snapshot.total_capacity,
            customer_count = snapshot.customer_count,
            changed = previous != snapshot,
            "Restaurant capacity recomputed"
        );

        Ok(restaurant)
    }

    /// Recompute every restaurant concurrently, returning them in listing order.
    ///
    /// The first failure aborts the whole listing.
    pub async fn recompute_all(&self) -> RepoResult<Vec<Restaurant>> {
        let ids = self.store.list_ids().await?;
        let restaurants = try_join_all(ids.iter().map(|id| self.recompute(id))).await?;

        tracing::info!(count = restaurants.len(), "Restaurant capacities refreshed");
        Ok(restaurants)
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
