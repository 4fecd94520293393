//! Health check endpoint for service monitoring.

use crate::state::AppState;
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Name of the institution served by this instance
    pub institution: String,

    /// Number of accounts currently in the ledger
    pub accounts: usize,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "institution": "Banco Digital",
///   "accounts": 2,
///   "timestamp": "2025-12-21T19:00:00Z"
/// }
/// ```
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let bank = state.bank.read().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        institution: bank.institution_name().to_string(),
        accounts: bank.accounts().len(),
        timestamp: Utc::now(),
    })
}
