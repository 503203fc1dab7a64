//! Restaurant Repository

use std::collections::HashMap;

use super::{BaseRepository, RepoError, RepoResult};
use crate::capacity::{ActiveOrder, RestaurantStore, RestaurantWithActiveOrders, TableOrders};
use crate::db::models::{DiningTableRecord, OrderStatusRow, RestaurantRecord};
use async_trait::async_trait;
use shared::models::{OrderStatus, Restaurant};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "restaurant";

#[derive(Clone)]
pub struct RestaurantRepository {
    base: BaseRepository,
}

impl RestaurantRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Parse a `restaurant:<key>` id, rejecting ids of other tables
    fn parse_id(id: &str) -> RepoResult<RecordId> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid restaurant ID: {}", id)))?;
        if thing.table() != TABLE {
            return Err(RepoError::Validation(format!(
                "Invalid restaurant ID: {}",
                id
            )));
        }
        Ok(thing)
    }

    /// Resolve table references in list order, skipping dangling ones
    async fn find_tables(&self, refs: &[RecordId]) -> RepoResult<Vec<DiningTableRecord>> {
        let mut tables = Vec::with_capacity(refs.len());
        for table_ref in refs {
            let table: Option<DiningTableRecord> = self.base.db().select(table_ref.clone()).await?;
            if let Some(table) = table {
                tables.push(table);
            }
        }
        Ok(tables)
    }

    /// Orders among `refs` whose status is not completed, one entry per
    /// reference in list order. Dangling references are skipped.
    async fn find_active_orders(&self, refs: &[RecordId]) -> RepoResult<Vec<ActiveOrder>> {
        if refs.is_empty() {
            return Ok(Vec::new());
        }
        let rows: Vec<OrderStatusRow> = self
            .base
            .db()
            .query(
                "SELECT <string>id AS id, status FROM order WHERE id IN $orders AND status != $completed",
            )
            .bind(("orders", refs.to_vec()))
            .bind(("completed", OrderStatus::COMPLETED))
            .await?
            .take(0)?;

        // IN 会去重，按引用重新展开
        let active: HashMap<String, ActiveOrder> = rows
            .into_iter()
            .map(|row| (row.id.clone(), ActiveOrder::from(row)))
            .collect();
        Ok(refs
            .iter()
            .filter_map(|order_ref| active.get(&order_ref.to_string()).cloned())
            .collect())
    }
}

#[async_trait]
impl RestaurantStore for RestaurantRepository {
    async fn list_ids(&self) -> RepoResult<Vec<String>> {
        let mut ids: Vec<String> = self
            .base
            .db()
            .query("SELECT VALUE <string>id FROM restaurant")
            .await?
            .take(0)?;
        ids.sort();
        Ok(ids)
    }

    async fn load_with_active_orders(
        &self,
        id: &str,
    ) -> RepoResult<Option<RestaurantWithActiveOrders>> {
        let thing = Self::parse_id(id)?;
        let Some(record): Option<RestaurantRecord> = self.base.db().select(thing).await? else {
            return Ok(None);
        };

        let mut tables = Vec::new();
        for table in self.find_tables(&record.table_list).await? {
            let orders = self.find_active_orders(&table.orders).await?;
            tables.push(TableOrders {
                table_id: table.id.as_ref().map(RecordId::to_string).unwrap_or_default(),
                orders,
            });
        }

        Ok(Some(RestaurantWithActiveOrders {
            restaurant: record.into(),
            tables,
        }))
    }

    async fn save(&self, restaurant: &Restaurant) -> RepoResult<()> {
        let thing = Self::parse_id(&restaurant.id)?;

        // 只写两个派生字段，其余字段保持数据库中的原样
        let updated: Vec<RestaurantRecord> = self
            .base
            .db()
            .query(
                "UPDATE $thing SET total_capacity = $total_capacity, \
                 customer_count = $customer_count RETURN id",
            )
            .bind(("thing", thing))
            .bind(("total_capacity", restaurant.total_capacity))
            .bind(("customer_count", restaurant.customer_count))
            .await?
            .take(0)?;

        if updated.is_empty() {
            return Err(RepoError::NotFound(format!(
                "Restaurant {} not found",
                restaurant.id
            )));
        }
        Ok(())
    }
}
