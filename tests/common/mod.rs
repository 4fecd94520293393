// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use digital_bank_server::{
    error::SheetsError,
    routes,
    services::{
        bank::Bank,
        sheets_service::{SheetRow, SheetStore},
    },
    state::AppState,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Router over a fresh, empty ledger with spreadsheet sync disabled
pub fn test_app() -> Router {
    routes::router(AppState::new(Bank::default()))
}

/// Router over a fresh ledger backed by the given spreadsheet fake
pub fn test_app_with_sheets(store: Arc<MemorySheet>) -> Router {
    routes::router(AppState::new(Bank::default()).with_sheets(store))
}

/// Send one request and return the status and body text
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    let request = match body {
        Some(json) => request.body(Body::from(json.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, String) {
    send(app, Method::POST, uri, Some(body)).await
}

/// Open an account through the API and return its JSON
pub async fn create_account(app: &Router, name: &str, tax_id: &str) -> Value {
    let (status, body) = post(
        app,
        "/api/accounts",
        serde_json::json!({ "name": name, "taxId": tax_id }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_str(&body).unwrap()
}

/// Current balance of an account as reported by the API
pub async fn balance_of(app: &Router, number: u32) -> f64 {
    let (status, body) = get(app, &format!("/api/accounts/{}", number)).await;
    assert_eq!(status, StatusCode::OK);
    let account: Value = serde_json::from_str(&body).unwrap();
    account["balance"].as_f64().unwrap()
}

/// In-memory spreadsheet
#[derive(Default)]
pub struct MemorySheet {
    pub rows: Mutex<Vec<SheetRow>>,
    pub fail: bool,
}

impl MemorySheet {
    pub fn with_rows(rows: Vec<Vec<&str>>) -> Self {
        Self {
            rows: Mutex::new(
                rows.into_iter()
                    .map(|row| row.into_iter().map(str::to_string).collect())
                    .collect(),
            ),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    fn check(&self) -> Result<(), SheetsError> {
        if self.fail {
            return Err(SheetsError::Status {
                status: 500,
                body: "backend error".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl SheetStore for MemorySheet {
    async fn read_rows(&self) -> Result<Vec<SheetRow>, SheetsError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn append_row(&self, row: SheetRow) -> Result<(), SheetsError> {
        self.check()?;
        self.rows.lock().unwrap().push(row);
        Ok(())
    }
}
