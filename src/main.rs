//! Digital Bank Server - Main Application Entry Point
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create the empty ledger
//! 3. Connect the spreadsheet client, if configured
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

use digital_bank_server::{
    config::Config,
    routes,
    services::{bank::Bank, sheets_service::GoogleSheetsClient},
    state::AppState,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let bank = Bank::new(config.institution_name.clone());
    tracing::info!("Ledger for {} created", bank.institution_name());

    let mut state = AppState::new(bank);
    match config.sheets() {
        Some(sheets) => {
            let client = GoogleSheetsClient::new(sheets)?;
            state = state.with_sheets(Arc::new(client));
            tracing::info!("Spreadsheet sync enabled");
        }
        None => tracing::info!("Spreadsheet sync disabled"),
    }

    let app = routes::router(state.clone());

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // In-memory only; dump the final ledger so its contents are not silently lost
    let report = state.bank.read().await.report();
    tracing::info!("Shutting down\n{}", report);

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, keep serving until the process is killed
        std::future::pending::<()>().await;
    }
}
