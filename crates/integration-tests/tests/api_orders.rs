//! Integration tests for order endpoints: ownership listing, status
//! partition, the status update, and both aggregations.
//!
//! Run with: cargo test -p furniro-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

fn base_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

fn unique_email(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("{prefix}-{nanos}@example.com")
}

async fn add_order(client: &Client, body: &Value) -> String {
    let resp = client
        .post(format!("{}/addOrder", base_url()))
        .json(body)
        .send()
        .await
        .expect("Failed to add order");
    assert_eq!(resp.status(), StatusCode::OK);

    let ack: Value = resp.json().await.expect("Failed to parse ack");
    ack["insertedId"]
        .as_str()
        .expect("insertedId should be a hex string")
        .to_string()
}

async fn get_array(client: &Client, path: &str) -> Vec<Value> {
    client
        .get(format!("{}{path}", base_url()))
        .send()
        .await
        .expect("Failed to reach API")
        .json::<Value>()
        .await
        .expect("Failed to parse body")
        .as_array()
        .expect("expected a JSON array")
        .clone()
}

fn contains_id(orders: &[Value], id: &str) -> bool {
    orders.iter().any(|o| o["_id"] == id)
}

#[tokio::test]
#[ignore = "Requires running API server and MongoDB"]
async fn test_order_lifecycle_scenario() {
    let client = Client::new();
    let email = unique_email("lifecycle");

    // POST /addOrder {primaryEmail, status: pending, totalPrice: 100}
    let id = add_order(
        &client,
        &json!({ "primaryEmail": email, "status": "pending", "totalPrice": 100 }),
    )
    .await;

    // GET /orders/{email} returns an array containing that order
    let owned = get_array(&client, &format!("/orders/{email}")).await;
    assert!(contains_id(&owned, &id));

    // The pending listing contains it, completed does not
    assert!(contains_id(&get_array(&client, "/pendingOrders").await, &id));
    assert!(!contains_id(
        &get_array(&client, "/completedOrders").await,
        &id
    ));

    // PUT /updateOrder/{id} {status: completed}
    let resp = client
        .put(format!("{}/updateOrder/{id}", base_url()))
        .json(&json!({ "status": "completed" }))
        .send()
        .await
        .expect("Failed to update order");
    assert_eq!(resp.status(), StatusCode::OK);
    let ack: Value = resp.json().await.expect("Failed to parse ack");
    assert_eq!(ack["matchedCount"], 1);

    // The order moved between status partitions
    assert!(contains_id(
        &get_array(&client, "/completedOrders").await,
        &id
    ));
    assert!(!contains_id(
        &get_array(&client, "/pendingOrders").await,
        &id
    ));
}

#[tokio::test]
#[ignore = "Requires running API server and MongoDB"]
async fn test_status_partition_covers_all_orders() {
    let client = Client::new();
    let email = unique_email("partition");

    for status in ["pending", "completed", "cancelled"] {
        add_order(
            &client,
            &json!({ "primaryEmail": email, "status": status, "totalPrice": 10 }),
        )
        .await;
    }

    let all = get_array(&client, "/allOrders").await;
    let pending = get_array(&client, "/pendingOrders").await;
    let completed = get_array(&client, "/completedOrders").await;
    let cancelled = get_array(&client, "/cancelledOrders").await;

    // Every order with a known status shows up in exactly one partition
    for order in &all {
        let id = order["_id"].as_str().expect("order without _id");
        let memberships = [
            contains_id(&pending, id),
            contains_id(&completed, id),
            contains_id(&cancelled, id),
        ]
        .iter()
        .filter(|m| **m)
        .count();

        match order["status"].as_str() {
            Some("pending" | "completed" | "cancelled") => {
                assert_eq!(memberships, 1, "order {id} in {memberships} partitions");
            }
            _ => assert_eq!(memberships, 0),
        }
    }
}

#[tokio::test]
#[ignore = "Requires running API server and MongoDB"]
async fn test_order_stats_match_listings() {
    let client = Client::new();
    let email = unique_email("stats");
    add_order(
        &client,
        &json!({ "primaryEmail": email, "status": "pending", "totalPrice": 42.5 }),
    )
    .await;

    let all = get_array(&client, "/allOrders").await;
    let stats = get_array(&client, "/orderStats").await;
    let amounts = get_array(&client, "/orderAmountStats").await;

    // Counts grouped by status sum to the total number of orders
    let counted: u64 = stats
        .iter()
        .map(|g| g["count"].as_u64().expect("count should be a number"))
        .sum();
    assert_eq!(counted, all.len() as u64);

    // Each group's totalAmount equals the sum of totalPrice over that status
    for group in &amounts {
        let status = &group["_id"];
        let expected: f64 = all
            .iter()
            .filter(|o| &o["status"] == status)
            .filter_map(|o| o["totalPrice"].as_f64())
            .sum();
        let actual = group["totalAmount"]
            .as_f64()
            .expect("totalAmount should be a number");
        assert!(
            (actual - expected).abs() < 1e-6,
            "amount mismatch for {status}: {actual} != {expected}"
        );
    }
}
