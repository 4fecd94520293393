//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers: the account ledger and
//! the spreadsheet sync.

pub mod bank;
pub mod sheets_service;
