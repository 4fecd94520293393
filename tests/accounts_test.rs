//! Account endpoints: open, list, lookup, health.

mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::{Value, json};

#[tokio::test]
async fn test_list_starts_empty() {
    let app = test_app();

    let (status, body) = get(&app, "/api/accounts").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!([]));
}

#[tokio::test]
async fn test_create_account_returns_new_account() {
    let app = test_app();

    let account = create_account(&app, "Ana", "111").await;

    assert_eq!(
        account,
        json!({
            "agency": 1,
            "number": 1,
            "balance": 0.0,
            "owner": { "name": "Ana", "taxId": "111" }
        })
    );
}

#[tokio::test]
async fn test_account_numbers_strictly_increase() {
    let app = test_app();

    let mut numbers = Vec::new();
    for i in 0..5 {
        let account = create_account(&app, &format!("Client {}", i), "000").await;
        numbers.push(account["number"].as_u64().unwrap());
    }

    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_list_returns_accounts_in_creation_order() {
    let app = test_app();
    create_account(&app, "Ana", "111").await;
    create_account(&app, "Bruno", "222").await;

    let (status, body) = get(&app, "/api/accounts").await;
    let accounts: Vec<Value> = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0]["owner"]["name"], "Ana");
    assert_eq!(accounts[1]["owner"]["name"], "Bruno");
    assert_eq!(accounts[1]["number"], 2);
}

#[tokio::test]
async fn test_get_account_by_number() {
    let app = test_app();
    create_account(&app, "Ana", "111").await;
    create_account(&app, "Bruno", "222").await;

    let (status, body) = get(&app, "/api/accounts/2").await;
    let account: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(account["owner"]["taxId"], "222");
}

#[tokio::test]
async fn test_get_missing_account_is_404_with_empty_body() {
    let app = test_app();
    create_account(&app, "Ana", "111").await;

    let (status, body) = get(&app, "/api/accounts/42").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_health_reports_account_count() {
    let app = test_app();
    create_account(&app, "Ana", "111").await;

    let (status, body) = get(&app, "/health").await;
    let health: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["institution"], "Banco Digital");
    assert_eq!(health["accounts"], 1);
}
