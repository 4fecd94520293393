//! Account management HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - POST /api/accounts - Open new account
//! - GET /api/accounts/{number} - Get account by number
//! - GET /api/accounts - List all accounts

use crate::{
    error::AppError,
    models::account::{Account, AccountNumber, CreateAccountRequest},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
};

/// Open a new account.
///
/// # Endpoint
///
/// `POST /api/accounts`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Ana",
///   "taxId": "111"
/// }
/// ```
///
/// # Response (200 OK)
///
/// The new account, with a zero balance and the next number from the bank's sequence.
/// Once the sequence is exhausted the answer is 503 with a text message.
///
/// ```json
/// {
///   "agency": 1,
///   "number": 1,
///   "balance": 0.0,
///   "owner": { "name": "Ana", "taxId": "111" }
/// }
/// ```
pub async fn create_account(
    State(state): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<Json<Account>, AppError> {
    let mut bank = state.bank.write().await;
    let account = bank.open_account(request.into())?.clone();

    Ok(Json(account))
}

/// Get a specific account by number.
///
/// # URL Parameters
///
/// - `number` - account number
///
/// # Response
///
/// - **Success (200 OK)**: Returns the account
/// - **Error (404)**: No such account (empty body)
pub async fn get_account(
    State(state): State<AppState>,
    Path(number): Path<AccountNumber>,
) -> Result<Json<Account>, AppError> {
    let bank = state.bank.read().await;
    let account = bank
        .find_account(number)
        .cloned()
        .ok_or(AppError::AccountNotFound)?;

    Ok(Json(account))
}

/// List all accounts.
///
/// # Endpoint
///
/// `GET /api/accounts`
///
/// # Ordering
///
/// Accounts are returned in the order they were opened. The array may be empty.
pub async fn list_accounts(State(state): State<AppState>) -> Json<Vec<Account>> {
    let bank = state.bank.read().await;

    Json(bank.accounts().to_vec())
}
