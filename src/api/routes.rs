//! HTTP API route definitions.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{
    create_invoice, get_invoice, health, home, list_invoices, render_metrics, AppState,
};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Info and health endpoints
        .route("/", get(home))
        .route("/health", get(health))
        // Invoice endpoints
        .route("/facturas", post(create_invoice).get(list_invoices))
        .route("/facturas/:id", get(get_invoice))
        // Metrics endpoint
        .route("/metrics", get(render_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
