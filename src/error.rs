//! Error types and HTTP error response handling.
//!
//! This module defines the domain error raised by account operations, the errors of the
//! spreadsheet sync client, and how application errors are converted into HTTP responses.
//!
//! Responses are plain text (or empty), matching the message-style bodies the account
//! endpoints return on success.

use crate::models::{account::AccountNumber, money::Money};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// A withdrawal (or the withdrawal half of a transfer) asked for more than the balance.
///
/// This is a business-rule failure, never a process fault. The balance is untouched when it
/// is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Insufficient funds. Current balance: {balance}, attempted withdrawal: {requested}")]
pub struct InsufficientFunds {
    /// Balance at the time of the attempt
    pub balance: Money,

    /// Amount that was requested
    pub requested: Money,
}

/// A credit would push the balance past the largest representable amount.
///
/// The balance is untouched when it is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Deposit of {amount} would exceed the maximum balance of account {account}.")]
pub struct BalanceOverflow {
    pub account: AccountNumber,
    pub amount: Money,
}

/// Why a transfer between two accounts was refused. Neither balance changes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    #[error(transparent)]
    InsufficientFunds(#[from] InsufficientFunds),

    #[error(transparent)]
    BalanceOverflow(#[from] BalanceOverflow),
}

/// Failures talking to the spreadsheet backend.
#[derive(Debug, thiserror::Error)]
pub enum SheetsError {
    /// Transport-level failure (connection refused, timeout, bad JSON body).
    #[error("Spreadsheet request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Spreadsheet API returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The configured API base or spreadsheet id does not form a valid URL.
    #[error("Invalid spreadsheet URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and body.
///
/// # Error Categories
///
/// - **Lookup misses**: the requested account does not exist
/// - **Business rule errors**: insufficient funds, balance overflow, numbers exhausted
/// - **Sync errors**: spreadsheet disabled or unreachable
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Account in the URL path does not exist.
    ///
    /// Returns HTTP 404 with an empty body.
    #[error("Account not found")]
    AccountNotFound,

    /// Origin account of a transfer does not exist.
    ///
    /// Returns HTTP 404. Checked before the destination.
    #[error("Source account not found.")]
    SourceAccountNotFound,

    /// Destination account of a transfer does not exist.
    ///
    /// Returns HTTP 404.
    #[error("Destination account not found.")]
    DestinationAccountNotFound,

    /// Returns HTTP 400 with the balance and requested amount in the message.
    #[error(transparent)]
    InsufficientFunds(#[from] InsufficientFunds),

    /// Returns HTTP 400; the credit was refused and no balance changed.
    #[error(transparent)]
    BalanceOverflow(#[from] BalanceOverflow),

    /// The account number sequence has handed out its last number.
    ///
    /// Returns HTTP 503.
    #[error("No account numbers left to assign.")]
    AccountNumbersExhausted,

    /// No spreadsheet is configured for this instance.
    ///
    /// Returns HTTP 503.
    #[error("Spreadsheet sync is not configured.")]
    SheetsDisabled,

    /// Spreadsheet backend failed.
    ///
    /// Returns HTTP 502 and hides the upstream details from the client.
    #[error(transparent)]
    Sheets(#[from] SheetsError),
}

impl From<TransferError> for AppError {
    fn from(err: TransferError) -> Self {
        match err {
            TransferError::InsufficientFunds(e) => AppError::InsufficientFunds(e),
            TransferError::BalanceOverflow(e) => AppError::BalanceOverflow(e),
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// # Status Code Mapping
///
/// - `AccountNotFound` → 404 Not Found (empty body)
/// - `SourceAccountNotFound` / `DestinationAccountNotFound` → 404 Not Found (text)
/// - `InsufficientFunds` / `BalanceOverflow` → 400 Bad Request (text)
/// - `AccountNumbersExhausted` → 503 Service Unavailable (text)
/// - `SheetsDisabled` → 503 Service Unavailable (text)
/// - `Sheets` → 502 Bad Gateway (generic text, details logged)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::AccountNotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::SourceAccountNotFound | AppError::DestinationAccountNotFound => {
                (StatusCode::NOT_FOUND, self.to_string()).into_response()
            }
            AppError::InsufficientFunds(ref err) => {
                (StatusCode::BAD_REQUEST, err.to_string()).into_response()
            }
            AppError::BalanceOverflow(ref err) => {
                (StatusCode::BAD_REQUEST, err.to_string()).into_response()
            }
            AppError::AccountNumbersExhausted | AppError::SheetsDisabled => {
                (StatusCode::SERVICE_UNAVAILABLE, self.to_string()).into_response()
            }
            AppError::Sheets(ref err) => {
                tracing::error!("Spreadsheet sync failed: {}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    "Spreadsheet sync failed.".to_string(),
                )
                    .into_response()
            }
        }
    }
}
