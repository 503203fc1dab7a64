//! Dining Table Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Dining table record (桌台)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableRecord {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// Order references, oldest first
    #[serde(default, with = "serde_helpers::vec_record_id")]
    pub orders: Vec<RecordId>,
}
