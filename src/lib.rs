//! Digital bank REST service.
//!
//! A REST API over an in-memory ledger of accounts, with deposit, withdraw and transfer
//! operations and overdraft protection, plus an optional one-way sync to a spreadsheet.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: in-memory `Bank` behind a `tokio::sync::RwLock`, lost on restart
//! - **Money**: `rust_decimal` fixed-point amounts
//! - **Spreadsheet sync**: Google Sheets v4 REST API through `reqwest`
//! - **Format**: JSON requests, JSON or plain-text responses

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
