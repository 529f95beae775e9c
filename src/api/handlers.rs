//! HTTP API handlers.

use std::collections::HashMap;
use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::invoice::{CreateInvoice, Invoice, InvoiceStore};
use crate::metrics;

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared invoice store.
    pub store: InvoiceStore,
    /// Prometheus render handle for the metrics endpoint.
    pub metrics: PrometheusHandle,
}

impl AppState {
    /// Create new app state around a store and metrics handle.
    pub fn new(store: InvoiceStore, metrics: PrometheusHandle) -> Self {
        Self { store, metrics }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Static service info response.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    /// Service banner message.
    pub mensaje: &'static str,
    /// Index of the invoice endpoints.
    pub endpoints: EndpointIndex,
}

/// Endpoint index in the service info response.
#[derive(Debug, Serialize)]
pub struct EndpointIndex {
    /// Invoice creation endpoint.
    pub crear_factura: &'static str,
    /// Single invoice lookup endpoint.
    pub obtener_factura: &'static str,
    /// Full listing endpoint.
    pub listar_facturas: &'static str,
}

/// Service info handler - static descriptive payload.
pub async fn home() -> impl IntoResponse {
    Json(ServiceInfo {
        mensaje: "Microservicio de Facturas activo 🚀",
        endpoints: EndpointIndex {
            crear_factura: "POST /facturas",
            obtener_factura: "GET /facturas/<id>",
            listar_facturas: "GET /facturas",
        },
    })
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Create an invoice.
///
/// The payload extractor is optional so a missing or malformed body takes
/// the same rejection path as missing fields: 400 "Datos incompletos".
pub async fn create_invoice(
    State(state): State<AppState>,
    payload: Option<Json<CreateInvoice>>,
) -> Result<(StatusCode, Json<Invoice>), ApiError> {
    let start = Instant::now();

    let Some(Json(payload)) = payload else {
        metrics::inc_creates_rejected();
        return Err(ApiError::IncompleteData);
    };

    let (Some(cliente), Some(total)) = (payload.cliente, payload.total) else {
        metrics::inc_creates_rejected();
        return Err(ApiError::IncompleteData);
    };

    let invoice = state.store.create(cliente, total);
    info!(id = %invoice.id, cliente = %invoice.cliente, "Invoice created");

    metrics::inc_invoices_created();
    metrics::record_http_latency(start, "crear_factura");

    Ok((StatusCode::CREATED, Json(invoice)))
}

/// Fetch a single invoice by identifier.
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Invoice>, ApiError> {
    let start = Instant::now();

    match state.store.get(&id) {
        Some(invoice) => {
            metrics::inc_lookup_hits();
            metrics::record_http_latency(start, "obtener_factura");
            Ok(Json(invoice))
        }
        None => {
            debug!(%id, "Invoice not found");
            metrics::inc_lookup_misses();
            Err(ApiError::NotFound { id })
        }
    }
}

/// Return the entire id -> invoice mapping.
pub async fn list_invoices(State(state): State<AppState>) -> Json<HashMap<String, Invoice>> {
    let start = Instant::now();

    let all = state.store.all();
    metrics::record_http_latency(start, "listar_facturas");

    Json(all)
}

/// Render Prometheus metrics in text exposition format.
pub async fn render_metrics(State(state): State<AppState>) -> String {
    state.metrics.render()
}
