//! HTTP router.
//!
//! Builds the full `Router` with routes and middleware. Kept out of `main` so tests can drive
//! the exact same router in-process.

use crate::{handlers, state::AppState};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the application router around `state`.
pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Account management routes
        .route(
            "/api/accounts",
            get(handlers::accounts::list_accounts).post(handlers::accounts::create_account),
        )
        .route(
            "/api/accounts/{number}",
            get(handlers::accounts::get_account),
        )
        // Money routes
        .route(
            "/api/accounts/{number}/deposit",
            post(handlers::transactions::deposit),
        )
        .route(
            "/api/accounts/{number}/withdraw",
            post(handlers::transactions::withdraw),
        )
        .route(
            "/api/accounts/{number}/transfer",
            post(handlers::transactions::transfer),
        )
        // Spreadsheet sync routes
        .route(
            "/api/sheets/accounts",
            get(handlers::sheets::import_accounts),
        )
        .route(
            "/api/sheets/accounts/{number}",
            post(handlers::sheets::export_account),
        );

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(api_routes)
        // Browser front-ends may be served from another origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
