//! 类型转换模块
//!
//! 将数据库模型 (db::models) 转换为 API 模型 (shared::models)

use crate::db::models as db;
use shared::models as api;
use surrealdb::RecordId;

// ============ Helper ============

pub fn record_ids_to_strings(ids: &[RecordId]) -> Vec<String> {
    ids.iter().map(RecordId::to_string).collect()
}

// ============ Restaurant ============

impl From<db::RestaurantRecord> for api::Restaurant {
    fn from(r: db::RestaurantRecord) -> Self {
        Self {
            id: r.id.as_ref().map(RecordId::to_string).unwrap_or_default(),
            name: r.name,
            address: r.address,
            features: r.features,
            table_list: record_ids_to_strings(&r.table_list),
            staff_list: record_ids_to_strings(&r.staff_list),
            menu: r.menu,
            total_capacity: r.total_capacity,
            customer_count: r.customer_count,
        }
    }
}

// ============ Order ============

impl From<db::OrderStatusRow> for crate::capacity::ActiveOrder {
    fn from(row: db::OrderStatusRow) -> Self {
        Self {
            id: row.id,
            status: api::OrderStatus::from(row.status.unwrap_or_default()),
        }
    }
}
