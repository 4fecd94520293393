//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params)
//! 2. Calls into the ledger or the spreadsheet service
//! 3. Returns an HTTP response (JSON or a text message, with a status code)

/// Account management endpoints
pub mod accounts;
/// Service health endpoint
pub mod health;
/// Spreadsheet import/export endpoints
pub mod sheets;
/// Deposit, withdraw and transfer endpoints
pub mod transactions;
