//! Prometheus metrics for the invoice API.
//!
//! This module provides metrics for:
//! - Invoice creation and rejection counts
//! - Lookup hits and misses
//! - HTTP request latency per endpoint

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::debug;

// === Metric Name Constants ===

/// Invoices created counter metric name.
pub const METRIC_INVOICES_CREATED: &str = "invoices_created_total";
/// Rejected create requests counter metric name.
pub const METRIC_CREATES_REJECTED: &str = "invoice_creates_rejected_total";
/// Successful lookups counter metric name.
pub const METRIC_LOOKUP_HITS: &str = "invoice_lookup_hits_total";
/// Failed lookups counter metric name.
pub const METRIC_LOOKUP_MISSES: &str = "invoice_lookup_misses_total";
/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";

/// Install the Prometheus recorder and return its render handle.
///
/// Must be called once at startup, before any metric is recorded.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_INVOICES_CREATED,
        "Total number of invoices created"
    );
    describe_counter!(
        METRIC_CREATES_REJECTED,
        "Total number of create requests rejected as incomplete"
    );
    describe_counter!(
        METRIC_LOOKUP_HITS,
        "Total number of invoice lookups that found a record"
    );
    describe_counter!(
        METRIC_LOOKUP_MISSES,
        "Total number of invoice lookups for unknown ids"
    );
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );

    debug!("Metrics initialized");
}

/// Record HTTP request latency for an endpoint.
pub fn record_http_latency(start: Instant, endpoint: &'static str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "endpoint" => endpoint).record(latency_ms);
}

/// Increment invoices created counter.
pub fn inc_invoices_created() {
    counter!(METRIC_INVOICES_CREATED).increment(1);
}

/// Increment rejected create requests counter.
pub fn inc_creates_rejected() {
    counter!(METRIC_CREATES_REJECTED).increment(1);
}

/// Increment lookup hits counter.
pub fn inc_lookup_hits() {
    counter!(METRIC_LOOKUP_HITS).increment(1);
}

/// Increment lookup misses counter.
pub fn inc_lookup_misses() {
    counter!(METRIC_LOOKUP_MISSES).increment(1);
}
