//! Metrics collection and exposition.
//!
//! # Metrics
//! - `edgeguard_requests_total` (counter): decisions by outcome
//! - `edgeguard_decision_duration_seconds` (histogram): classifier latency
//!
//! Recording is a no-op until an exporter is installed, so the middleware
//! can call these unconditionally.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one guard decision.
pub fn record_decision(outcome: &'static str, start: Instant) {
    metrics::counter!("edgeguard_requests_total", "outcome" => outcome).increment(1);
    metrics::histogram!("edgeguard_decision_duration_seconds")
        .record(start.elapsed().as_secs_f64());
}
