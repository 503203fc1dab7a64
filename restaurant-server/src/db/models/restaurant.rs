//! Restaurant Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::models::MenuSection;
use surrealdb::RecordId;

/// Restaurant record (餐厅)
///
/// Descriptive fields fall back to defaults on unexpected shapes; only the
/// record links are required to be well formed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantRecord {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "serde_helpers::default_on_mismatch")]
    pub name: String,
    #[serde(default, deserialize_with = "serde_helpers::default_on_mismatch")]
    pub address: String,
    #[serde(default, deserialize_with = "serde_helpers::default_on_mismatch")]
    pub features: Vec<String>,
    /// Dining table references
    #[serde(default, with = "serde_helpers::vec_record_id")]
    pub table_list: Vec<RecordId>,
    /// Staff references
    #[serde(default, with = "serde_helpers::vec_record_id")]
    pub staff_list: Vec<RecordId>,
    #[serde(default, deserialize_with = "serde_helpers::default_on_mismatch")]
    pub menu: Vec<MenuSection>,
    #[serde(default, deserialize_with = "serde_helpers::default_on_mismatch")]
    pub total_capacity: u32,
    #[serde(default, deserialize_with = "serde_helpers::default_on_mismatch")]
    pub customer_count: u32,
}
