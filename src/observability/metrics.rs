//! Metrics collection and exposition.
//!
//! # Metrics
//! - `console_requests_total` (counter): HTTP requests by method, route, status
//! - `console_request_duration_seconds` (histogram): HTTP latency
//! - `console_nav_resolutions_total` (counter): resolutions by table and section
//! - `console_backend_calls_total` (counter): gateway backend calls by operation and outcome
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - The Prometheus exporter is opt-in (`observability.metrics_enabled`)

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus exporter with its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record a finished HTTP request.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("route", route.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("console_requests_total", &labels).increment(1);
    metrics::histogram!("console_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}

/// Record a navigation resolution served over HTTP.
pub fn record_resolution(table: &str, section: &str) {
    metrics::counter!(
        "console_nav_resolutions_total",
        "table" => table.to_string(),
        "section" => section.to_string()
    )
    .increment(1);
}

/// Record the outcome of a gateway backend call.
pub fn record_backend_call(operation: &'static str, outcome: &'static str) {
    metrics::counter!(
        "console_backend_calls_total",
        "operation" => operation,
        "outcome" => outcome
    )
    .increment(1);
}
