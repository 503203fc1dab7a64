//! Restaurant Model

use serde::{Deserialize, Serialize};

/// Restaurant entity (餐厅)
///
/// `total_capacity` and `customer_count` are derived counters. They are
/// rewritten on every read and never edited directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Record id, `restaurant:<key>`
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    /// Feature tags (e.g. "wifi", "outdoor")
    #[serde(default)]
    pub features: Vec<String>,
    /// Dining table references, `dining_table:<key>`
    #[serde(default)]
    pub table_list: Vec<String>,
    /// Staff references, `staff:<key>`
    #[serde(default)]
    pub staff_list: Vec<String>,
    #[serde(default)]
    pub menu: Vec<MenuSection>,
    /// Number of tables
    #[serde(default)]
    pub total_capacity: u32,
    /// Number of orders that are not completed
    #[serde(default)]
    pub customer_count: u32,
}

impl Restaurant {
    /// Overwrite both derived counters
    pub fn apply_capacity(&mut self, snapshot: CapacitySnapshot) {
        self.total_capacity = snapshot.total_capacity;
        self.customer_count = snapshot.customer_count;
    }

    pub fn capacity(&self) -> CapacitySnapshot {
        CapacitySnapshot {
            total_capacity: self.total_capacity,
            customer_count: self.customer_count,
        }
    }
}

/// One menu section, e.g. all breakfast meals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    #[serde(default)]
    pub meal_type: String,
    #[serde(default)]
    pub meals: Vec<Meal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(default)]
    pub meal_name: String,
    #[serde(default)]
    pub meal_price: f64,
    #[serde(default)]
    pub meal_count: u32,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Derived capacity counters of one restaurant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacitySnapshot {
    pub total_capacity: u32,
    pub customer_count: u32,
}
