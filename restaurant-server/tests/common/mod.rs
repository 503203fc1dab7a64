//! Seeding helpers for SurrealDB-backed tests

#![allow(dead_code)]

use restaurant_server::db::DbService;
use restaurant_server::db::models::RestaurantRecord;
use shared::models::{MenuSection, Restaurant};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

/// Open a throw-away RocksDB database; keep the TempDir alive for the test
pub async fn open_db() -> (tempfile::TempDir, Surreal<Db>) {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("database");
    let service = DbService::new(path.to_str().unwrap(), "test", "test")
        .await
        .unwrap();
    (tmp, service.db)
}

pub async fn create_order(db: &Surreal<Db>, key: &str, status: Option<&str>) -> RecordId {
    let id = RecordId::from_table_key("order", key);
    match status {
        Some(status) => db
            .query("CREATE $id SET status = $status")
            .bind(("id", id.clone()))
            .bind(("status", status.to_string()))
            .await
            .unwrap()
            .check()
            .unwrap(),
        None => db
            .query("CREATE $id SET note = 'no status'")
            .bind(("id", id.clone()))
            .await
            .unwrap()
            .check()
            .unwrap(),
    };
    id
}

/// Order whose status is a raw SurrealQL expression, e.g. `3` or `{ code: 1 }`
pub async fn create_order_with_raw_status(db: &Surreal<Db>, key: &str, status: &str) -> RecordId {
    let id = RecordId::from_table_key("order", key);
    db.query(format!("CREATE $id SET status = {status}"))
        .bind(("id", id.clone()))
        .await
        .unwrap()
        .check()
        .unwrap();
    id
}

pub async fn create_table(db: &Surreal<Db>, key: &str, orders: Vec<RecordId>) -> RecordId {
    let id = RecordId::from_table_key("dining_table", key);
    db.query("CREATE $id SET name = $name, orders = $orders")
        .bind(("id", id.clone()))
        .bind(("name", format!("Table {}", key)))
        .bind(("orders", orders))
        .await
        .unwrap()
        .check()
        .unwrap();
    id
}

pub async fn create_restaurant(
    db: &Surreal<Db>,
    key: &str,
    tables: Vec<RecordId>,
    menu: Vec<MenuSection>,
) -> String {
    let id = RecordId::from_table_key("restaurant", key);
    db.query(
        "CREATE $id SET name = $name, address = $address, features = $features, \
         table_list = $tables, staff_list = $staff, menu = $menu, \
         total_capacity = 99, customer_count = 99",
    )
    .bind(("id", id.clone()))
    .bind(("name", format!("Restaurant {}", key)))
    .bind(("address", "1 Main St".to_string()))
    .bind(("features", vec!["wifi".to_string(), "outdoor".to_string()]))
    .bind(("tables", tables))
    .bind(("staff", vec![RecordId::from_table_key("staff", "s1")]))
    .bind(("menu", menu))
    .await
    .unwrap()
    .check()
    .unwrap();
    id.to_string()
}

/// The reference scenario: T1 (pending, completed), T2 (completed)
pub async fn seed_reference_restaurant(db: &Surreal<Db>, key: &str) -> String {
    let o1 = create_order(db, &format!("{key}_o1"), Some("pending")).await;
    let o2 = create_order(db, &format!("{key}_o2"), Some("completed")).await;
    let o3 = create_order(db, &format!("{key}_o3"), Some("completed")).await;
    let t1 = create_table(db, &format!("{key}_t1"), vec![o1, o2]).await;
    let t2 = create_table(db, &format!("{key}_t2"), vec![o3]).await;
    create_restaurant(db, key, vec![t1, t2], vec![]).await
}

/// Read a restaurant straight from the database
pub async fn fetch_restaurant(db: &Surreal<Db>, id: &str) -> Option<Restaurant> {
    let thing: RecordId = id.parse().unwrap();
    let record: Option<RestaurantRecord> = db.select(thing).await.unwrap();
    record.map(Into::into)
}

/// Textual form of one stored field, for exact before/after comparisons
pub async fn stored_field(db: &Surreal<Db>, id: &str, field: &str) -> String {
    let thing: RecordId = id.parse().unwrap();
    let value: Option<String> = db
        .query(format!("SELECT VALUE <string>{field} FROM ONLY $thing"))
        .bind(("thing", thing))
        .await
        .unwrap()
        .take(0)
        .unwrap();
    value.unwrap()
}
