//! Capacity recomputation against an embedded SurrealDB
//! Run: cargo test -p restaurant-server --test restaurant_repository

mod common;

use std::sync::Arc;

use common::{
    create_order, create_order_with_raw_status, create_restaurant, create_table, fetch_restaurant,
    open_db, seed_reference_restaurant, stored_field,
};
use restaurant_server::capacity::{CapacityAggregator, RestaurantStore};
use restaurant_server::db::repository::{RepoError, RestaurantRepository};
use shared::models::{Meal, MenuSection};
use surrealdb::RecordId;

fn aggregator(repo: &RestaurantRepository) -> CapacityAggregator {
    CapacityAggregator::new(Arc::new(repo.clone()))
}

#[tokio::test]
async fn recompute_reference_restaurant() {
    let (_tmp, db) = open_db().await;
    let id = seed_reference_restaurant(&db, "uno").await;
    let repo = RestaurantRepository::new(db.clone());

    let refreshed = aggregator(&repo).recompute(&id).await.unwrap();
    assert_eq!(refreshed.total_capacity, 2);
    assert_eq!(refreshed.customer_count, 1);

    let stored = fetch_restaurant(&db, &id).await.unwrap();
    assert_eq!(stored.total_capacity, 2);
    assert_eq!(stored.customer_count, 1);
    // references survive the save untouched
    assert_eq!(
        stored.table_list,
        vec!["dining_table:uno_t1", "dining_table:uno_t2"]
    );
    assert_eq!(stored.staff_list, vec!["staff:s1"]);
}

#[tokio::test]
async fn load_drops_completed_orders() {
    let (_tmp, db) = open_db().await;
    let id = seed_reference_restaurant(&db, "uno").await;
    let repo = RestaurantRepository::new(db.clone());

    let loaded = repo.load_with_active_orders(&id).await.unwrap().unwrap();
    assert_eq!(loaded.tables.len(), 2);
    assert_eq!(loaded.tables[0].table_id, "dining_table:uno_t1");
    assert_eq!(loaded.tables[0].orders.len(), 1);
    assert_eq!(loaded.tables[0].orders[0].id, "order:uno_o1");
    assert!(loaded.tables[1].orders.is_empty());
}

#[tokio::test]
async fn recompute_without_tables_writes_zeroes() {
    let (_tmp, db) = open_db().await;
    let id = create_restaurant(&db, "empty", vec![], vec![]).await;
    let repo = RestaurantRepository::new(db.clone());

    let refreshed = aggregator(&repo).recompute(&id).await.unwrap();
    assert_eq!(refreshed.total_capacity, 0);
    assert_eq!(refreshed.customer_count, 0);

    let stored = fetch_restaurant(&db, &id).await.unwrap();
    assert_eq!(stored.total_capacity, 0);
    assert_eq!(stored.customer_count, 0);
}

#[tokio::test]
async fn recompute_twice_is_idempotent() {
    let (_tmp, db) = open_db().await;
    let id = seed_reference_restaurant(&db, "uno").await;
    let repo = RestaurantRepository::new(db.clone());
    let aggregator = aggregator(&repo);

    let first = aggregator.recompute(&id).await.unwrap();
    let second = aggregator.recompute(&id).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn unknown_and_missing_statuses_count_as_active() {
    let (_tmp, db) = open_db().await;
    let o1 = create_order(&db, "hold", Some("on-hold")).await;
    let o2 = create_order(&db, "bare", None).await;
    let o3 = create_order(&db, "done", Some("completed")).await;
    let t1 = create_table(&db, "t1", vec![o1, o2, o3]).await;
    let id = create_restaurant(&db, "odd", vec![t1], vec![]).await;
    let repo = RestaurantRepository::new(db.clone());

    let refreshed = aggregator(&repo).recompute(&id).await.unwrap();
    assert_eq!(refreshed.total_capacity, 1);
    assert_eq!(refreshed.customer_count, 2);
}

#[tokio::test]
async fn non_string_statuses_count_as_active() {
    let (_tmp, db) = open_db().await;
    let o1 = create_order_with_raw_status(&db, "num", "3").await;
    let o2 = create_order_with_raw_status(&db, "obj", "{ code: 1 }").await;
    let o3 = create_order(&db, "done", Some("completed")).await;
    let t1 = create_table(&db, "t1", vec![o1, o2, o3]).await;
    let id = create_restaurant(&db, "typed", vec![t1], vec![]).await;
    let repo = RestaurantRepository::new(db.clone());

    let refreshed = aggregator(&repo).recompute(&id).await.unwrap();
    assert_eq!(refreshed.total_capacity, 1);
    assert_eq!(refreshed.customer_count, 2);
}

#[tokio::test]
async fn dangling_references_are_skipped() {
    let (_tmp, db) = open_db().await;
    let live = create_order(&db, "live", Some("served")).await;
    let ghost_order = RecordId::from_table_key("order", "ghost");
    let t1 = create_table(&db, "t1", vec![live, ghost_order]).await;
    let ghost_table = RecordId::from_table_key("dining_table", "ghost");
    let id = create_restaurant(&db, "partial", vec![t1, ghost_table], vec![]).await;
    let repo = RestaurantRepository::new(db.clone());

    let refreshed = aggregator(&repo).recompute(&id).await.unwrap();
    assert_eq!(refreshed.total_capacity, 1);
    assert_eq!(refreshed.customer_count, 1);
}

#[tokio::test]
async fn save_keeps_descriptive_fields() {
    let (_tmp, db) = open_db().await;
    let menu = vec![MenuSection {
        meal_type: "lunch".to_string(),
        meals: vec![Meal {
            meal_name: "Soup".to_string(),
            meal_price: 4.5,
            meal_count: 2,
            ingredients: vec!["tomato".to_string(), "basil".to_string()],
        }],
    }];
    let id = create_restaurant(&db, "menu", vec![], menu.clone()).await;
    let repo = RestaurantRepository::new(db.clone());

    aggregator(&repo).recompute(&id).await.unwrap();

    let stored = fetch_restaurant(&db, &id).await.unwrap();
    assert_eq!(stored.name, "Restaurant menu");
    assert_eq!(stored.address, "1 Main St");
    assert_eq!(stored.features, vec!["wifi", "outdoor"]);
    assert_eq!(stored.menu, menu);
}

#[tokio::test]
async fn recompute_missing_restaurant_is_not_found() {
    let (_tmp, db) = open_db().await;
    let repo = RestaurantRepository::new(db.clone());

    let err = aggregator(&repo)
        .recompute("restaurant:ghost")
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));

    // nothing was created as a side effect
    assert!(fetch_restaurant(&db, "restaurant:ghost").await.is_none());
    assert!(repo.list_ids().await.unwrap().is_empty());
}

#[tokio::test]
async fn malformed_ids_are_rejected() {
    let (_tmp, db) = open_db().await;
    let repo = RestaurantRepository::new(db.clone());
    let aggregator = aggregator(&repo);

    for id in ["bogus", "order:o1", ""] {
        let err = aggregator.recompute(id).await.unwrap_err();
        assert!(
            matches!(err, RepoError::Validation(_)),
            "expected validation error for {id:?}, got {err:?}"
        );
    }
}

#[tokio::test]
async fn recompute_all_refreshes_in_id_order() {
    let (_tmp, db) = open_db().await;
    seed_reference_restaurant(&db, "beta").await;
    let busy = create_order(&db, "alpha_o1", Some("preparing")).await;
    let t1 = create_table(&db, "alpha_t1", vec![busy]).await;
    create_restaurant(&db, "alpha", vec![t1], vec![]).await;
    create_restaurant(&db, "gamma", vec![], vec![]).await;
    let repo = RestaurantRepository::new(db.clone());

    let restaurants = aggregator(&repo).recompute_all().await.unwrap();
    let summary: Vec<(String, u32, u32)> = restaurants
        .into_iter()
        .map(|r| (r.id, r.total_capacity, r.customer_count))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("restaurant:alpha".to_string(), 1, 1),
            ("restaurant:beta".to_string(), 2, 1),
            ("restaurant:gamma".to_string(), 0, 0),
        ]
    );
}

#[tokio::test]
async fn recompute_writes_only_the_counters() {
    let (_tmp, db) = open_db().await;
    let order = create_order(&db, "egg_o1", Some("pending")).await;
    create_table(&db, "egg_t1", vec![order]).await;
    db.query(
        "CREATE restaurant:egg SET name = 'Egg House', table_list = [dining_table:egg_t1], \
         owner = { name: 'Ana' }, rating = 4.5, \
         menu = [{ meal_type: 'breakfast', meals: [{ meal_name: 'Egg', meal_price: 2.5, \
         vegan: true, allergens: ['egg'], ingridients: ['egg'] }] }]",
    )
    .await
    .unwrap()
    .check()
    .unwrap();
    let id = "restaurant:egg";
    let menu_before = stored_field(&db, id, "menu").await;
    let owner_before = stored_field(&db, id, "owner").await;
    let rating_before = stored_field(&db, id, "rating").await;
    let repo = RestaurantRepository::new(db.clone());

    aggregator(&repo).recompute(id).await.unwrap();

    assert_eq!(stored_field(&db, id, "menu").await, menu_before);
    assert_eq!(stored_field(&db, id, "owner").await, owner_before);
    assert_eq!(stored_field(&db, id, "rating").await, rating_before);
    assert_eq!(stored_field(&db, id, "total_capacity").await, "1");
    assert_eq!(stored_field(&db, id, "customer_count").await, "1");
}

#[tokio::test]
async fn odd_descriptive_fields_do_not_block_recompute() {
    let (_tmp, db) = open_db().await;
    let order = create_order(&db, "odd_o1", Some("served")).await;
    create_table(&db, "odd_t1", vec![order]).await;
    db.query(
        "CREATE restaurant:odd SET name = 42, features = 'wifi', total_capacity = 'lots', \
         table_list = [dining_table:odd_t1], menu = [{ meals: [] }]",
    )
    .await
    .unwrap()
    .check()
    .unwrap();
    seed_reference_restaurant(&db, "plain").await;
    let repo = RestaurantRepository::new(db.clone());

    let refreshed = aggregator(&repo).recompute("restaurant:odd").await.unwrap();
    assert_eq!(refreshed.total_capacity, 1);
    assert_eq!(refreshed.customer_count, 1);
    assert_eq!(refreshed.menu[0].meal_type, "");
    // stored shapes are left as they were
    assert_eq!(stored_field(&db, "restaurant:odd", "name").await, "42");
    assert_eq!(stored_field(&db, "restaurant:odd", "features").await, "wifi");

    let all = aggregator(&repo).recompute_all().await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn repeated_references_count_as_listed() {
    let (_tmp, db) = open_db().await;
    let busy = create_order(&db, "dup_o1", Some("pending")).await;
    let done = create_order(&db, "dup_o2", Some("completed")).await;
    let t1 = create_table(&db, "dup_t1", vec![busy.clone(), busy, done]).await;
    let id = create_restaurant(&db, "dup", vec![t1.clone(), t1], vec![]).await;
    let repo = RestaurantRepository::new(db.clone());

    let loaded = repo.load_with_active_orders(&id).await.unwrap().unwrap();
    assert_eq!(loaded.tables.len(), 2);
    assert_eq!(loaded.tables[0].orders.len(), 2);

    let refreshed = aggregator(&repo).recompute(&id).await.unwrap();
    assert_eq!(refreshed.total_capacity, 2);
    assert_eq!(refreshed.customer_count, 4);
}
