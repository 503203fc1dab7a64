//! Order Model

use super::serde_helpers;
use serde::Deserialize;

/// Projection of an order row: `SELECT <string>id AS id, status FROM order`
#[derive(Debug, Clone, Deserialize)]
pub struct OrderStatusRow {
    pub id: String,
    /// Missing or non-string status is kept as an empty, non-terminal value
    #[serde(default, deserialize_with = "serde_helpers::default_on_mismatch")]
    pub status: Option<String>,
}
