//! Spreadsheet import/export endpoints against an in-memory sheet.

mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::{Value, json};
use std::sync::Arc;

#[tokio::test]
async fn test_sync_disabled_is_503() {
    let app = test_app();
    create_account(&app, "Ana", "111").await;

    let (import_status, _) = get(&app, "/api/sheets/accounts").await;
    let (export_status, body) = post(&app, "/api/sheets/accounts/1", json!({})).await;

    assert_eq!(import_status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(export_status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, "Spreadsheet sync is not configured.");
}

#[tokio::test]
async fn test_import_skips_blank_and_malformed_rows() {
    let sheet = Arc::new(MemorySheet::with_rows(vec![
        vec!["1", "1", "R$ 1.234,56", "Ana", "111"],
        vec![],
        vec!["", "1", "R$ 5.00", "Nobody", "000"],
        vec!["two", "1", "R$ 5.00", "Bruno", "222"],
        vec!["3", "1", "R$ 7.50"],
        vec!["4", "1", "R$ 7.50", "Carla", "333"],
    ]));
    let app = test_app_with_sheets(sheet);

    let (status, body) = get(&app, "/api/sheets/accounts").await;
    let accounts: Vec<Value> = serde_json::from_str(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(accounts.len(), 2);
    assert_eq!(
        accounts[0],
        json!({
            "agency": 1,
            "number": 1,
            "balance": 1234.56,
            "owner": { "name": "Ana", "taxId": "111" }
        })
    );
    assert_eq!(accounts[1]["number"], 4);
    assert_eq!(accounts[1]["balance"], 7.5);
}

#[tokio::test]
async fn test_import_does_not_touch_ledger() {
    let sheet = Arc::new(MemorySheet::with_rows(vec![vec![
        "1", "1", "R$ 10.00", "Ana", "111",
    ]]));
    let app = test_app_with_sheets(sheet);

    get(&app, "/api/sheets/accounts").await;
    let (_, body) = get(&app, "/api/accounts").await;

    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!([]));
}

#[tokio::test]
async fn test_export_appends_formatted_row() {
    let sheet = Arc::new(MemorySheet::default());
    let app = test_app_with_sheets(sheet.clone());
    create_account(&app, "Ana", "111").await;
    post(&app, "/api/accounts/1/deposit", json!({ "amount": 12.5 })).await;

    let (status, body) = post(&app, "/api/sheets/accounts/1", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Account 1 exported to spreadsheet.");
    assert_eq!(
        *sheet.rows.lock().unwrap(),
        vec![vec![
            "1".to_string(),
            "1".to_string(),
            "R$ 12.50".to_string(),
            "Ana".to_string(),
            "111".to_string(),
        ]]
    );
}

#[tokio::test]
async fn test_export_missing_account_is_404() {
    let sheet = Arc::new(MemorySheet::default());
    let app = test_app_with_sheets(sheet.clone());

    let (status, _) = post(&app, "/api/sheets/accounts/5", json!({})).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(sheet.rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_backend_failure_is_502() {
    let app = test_app_with_sheets(Arc::new(MemorySheet::failing()));
    create_account(&app, "Ana", "111").await;

    let (import_status, _) = get(&app, "/api/sheets/accounts").await;
    let (export_status, body) = post(&app, "/api/sheets/accounts/1", json!({})).await;

    assert_eq!(import_status, StatusCode::BAD_GATEWAY);
    assert_eq!(export_status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, "Spreadsheet sync failed.");
}
