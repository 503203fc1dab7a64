//! Order status model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order lifecycle status (订单状态)
///
/// `completed` is the only terminal value. Statuses outside the known set are
/// kept verbatim in [`OrderStatus::Other`] and count as active.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Served,
    Completed,
    Other(String),
}

impl OrderStatus {
    pub const COMPLETED: &'static str = "completed";

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::Served => "served",
            Self::Completed => Self::COMPLETED,
            Self::Other(raw) => raw,
        }
    }

    /// Whether the order has reached the terminal state
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => Self::Pending,
            "preparing" => Self::Preparing,
            "served" => Self::Served,
            Self::COMPLETED => Self::Completed,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
