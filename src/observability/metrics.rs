//! Metrics collection and exposition.
//!
//! # Metrics
//! - `flight_stats_requests_total` (counter): requests by endpoint, status
//! - `flight_stats_request_duration_seconds` (histogram): handler latency by endpoint
//! - `flight_stats_upstream_fetches_total` (counter): fetches by outcome
//! - `flight_stats_upstream_fetch_duration_seconds` (histogram): fetch latency
//! - `flight_stats_upstream_records` (gauge): records in the last successful fetch

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            describe_metrics();
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter");
        }
    }
}

fn describe_metrics() {
    describe_counter!("flight_stats_requests_total", "HTTP requests served");
    describe_histogram!(
        "flight_stats_request_duration_seconds",
        "HTTP request latency"
    );
    describe_counter!("flight_stats_upstream_fetches_total", "Flight board fetches");
    describe_histogram!(
        "flight_stats_upstream_fetch_duration_seconds",
        "Flight board fetch latency"
    );
    describe_gauge!(
        "flight_stats_upstream_records",
        "Records returned by the last successful fetch"
    );
}

/// Record a served request.
pub fn record_request(endpoint: &str, status: u16, start: Instant) {
    let endpoint = endpoint.to_string();
    counter!(
        "flight_stats_requests_total",
        "endpoint" => endpoint.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("flight_stats_request_duration_seconds", "endpoint" => endpoint)
        .record(start.elapsed().as_secs_f64());
}

/// Record one upstream fetch attempt.
pub fn record_upstream_fetch(success: bool, start: Instant) {
    let outcome = if success { "success" } else { "failure" };
    counter!("flight_stats_upstream_fetches_total", "outcome" => outcome).increment(1);
    histogram!("flight_stats_upstream_fetch_duration_seconds").record(start.elapsed().as_secs_f64());
}

pub fn record_upstream_records(count: usize) {
    gauge!("flight_stats_upstream_records").set(count as f64);
}
