//! HTTP handlers for the spreadsheet sync.
//!
//! Each call does one thing against the spreadsheet and nothing against the ledger beyond a
//! read:
//! - GET /api/sheets/accounts - read every account row from the spreadsheet
//! - POST /api/sheets/accounts/{number} - append one ledger account as a new row
//!
//! Both answer 503 when no spreadsheet is configured.

use crate::{
    error::AppError,
    models::account::AccountNumber,
    services::sheets_service::{self, SheetAccount, SheetStore},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

fn store(state: &AppState) -> Result<Arc<dyn SheetStore>, AppError> {
    state.sheets.clone().ok_or(AppError::SheetsDisabled)
}

/// Read the accounts recorded in the spreadsheet.
///
/// # Response (200 OK)
///
/// Array of accounts in the same shape as `GET /api/accounts`. Malformed rows are left out.
/// The ledger is not modified.
pub async fn import_accounts(
    State(state): State<AppState>,
) -> Result<Json<Vec<SheetAccount>>, AppError> {
    let store = store(&state)?;
    let accounts = sheets_service::import_accounts(store.as_ref()).await?;

    Ok(Json(accounts))
}

/// Append the current state of a ledger account to the spreadsheet.
///
/// # Response
///
/// - **Success (200 OK)**: `Account 1 exported to spreadsheet.`
/// - **Error (404)**: No such account (empty body)
/// - **Error (502)**: The spreadsheet API rejected the append
pub async fn export_account(
    State(state): State<AppState>,
    Path(number): Path<AccountNumber>,
) -> Result<String, AppError> {
    let store = store(&state)?;

    // Snapshot under the read lock; the guard must not be held across the network call
    let account = {
        let bank = state.bank.read().await;
        bank.find_account(number)
            .cloned()
            .ok_or(AppError::AccountNotFound)?
    };

    sheets_service::export_account(store.as_ref(), &account).await?;

    Ok(format!("Account {} exported to spreadsheet.", number))
}
