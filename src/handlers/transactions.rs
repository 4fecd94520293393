//! Balance-moving HTTP handlers.
//!
//! This module implements the money endpoints:
//! - POST /api/accounts/{number}/deposit - Add money to account
//! - POST /api/accounts/{number}/withdraw - Remove money from account
//! - POST /api/accounts/{number}/transfer - Move money to another account
//!
//! Successful calls answer with a plain-text confirmation message.

use crate::{
    error::AppError,
    models::{
        account::AccountNumber,
        transaction::{AmountRequest, TransferRequest},
    },
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
};

/// Deposit into an account.
///
/// # Request Body
///
/// ```json
/// { "amount": 12.50 }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: `Deposit of R$ 12.50 completed successfully on account 1.`
/// - **Error (400)**: The balance cannot hold the amount; nothing is credited
/// - **Error (404)**: No such account (empty body)
///
/// A zero or negative amount is ignored by the account but still answered with 200.
pub async fn deposit(
    State(state): State<AppState>,
    Path(number): Path<AccountNumber>,
    Json(request): Json<AmountRequest>,
) -> Result<String, AppError> {
    let mut bank = state.bank.write().await;
    let account = bank
        .find_account_mut(number)
        .ok_or(AppError::AccountNotFound)?;

    account.deposit(request.amount)?;

    Ok(format!(
        "Deposit of {} completed successfully on account {}.",
        request.amount, number
    ))
}

/// Withdraw from an account.
///
/// # Response
///
/// - **Success (200 OK)**: `Withdrawal of R$ 40.00 completed successfully on account 1.`
/// - **Error (400)**: Insufficient funds, body is the error message
/// - **Error (404)**: No such account (empty body)
pub async fn withdraw(
    State(state): State<AppState>,
    Path(number): Path<AccountNumber>,
    Json(request): Json<AmountRequest>,
) -> Result<String, AppError> {
    let mut bank = state.bank.write().await;
    let account = bank
        .find_account_mut(number)
        .ok_or(AppError::AccountNotFound)?;

    account.withdraw(request.amount)?;

    Ok(format!(
        "Withdrawal of {} completed successfully on account {}.",
        request.amount, number
    ))
}

/// Transfer from the account in the path to `destinationNumber`.
///
/// # Request Body
///
/// ```json
/// { "amount": 60.00, "destinationNumber": 2 }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: `Transfer of R$ 60.00 from account 1 to account 2 completed successfully.`
/// - **Error (404)**: `Source account not found.` or `Destination account not found.`
/// - **Error (400)**: Insufficient funds; neither balance changes
///
/// The write lock is held for the whole transfer, so no other request observes the source
/// debited before the destination is credited.
pub async fn transfer(
    State(state): State<AppState>,
    Path(source): Path<AccountNumber>,
    Json(request): Json<TransferRequest>,
) -> Result<String, AppError> {
    let mut bank = state.bank.write().await;

    bank.transfer(source, request.destination_number, request.amount)?;

    Ok(format!(
        "Transfer of {} from account {} to account {} completed successfully.",
        request.amount, source, request.destination_number
    ))
}
