//! Prometheus metrics for request outcomes and latency.
//!
//! Recording goes through the `metrics` facade, so every call is a no-op
//! until [`install_exporter`] has installed a recorder.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::{debug, info};

use crate::error::{Result, ServiceError};

// === Metric Name Constants ===

/// Add requests counter metric name, labelled by `outcome`.
pub const METRIC_ADD_REQUESTS: &str = "add_requests_total";
/// Health requests counter metric name.
pub const METRIC_HEALTH_REQUESTS: &str = "health_requests_total";
/// Add handler latency metric name.
pub const METRIC_ADD_LATENCY: &str = "add_latency_ms";

/// Outcome label for a successful addition.
pub const OUTCOME_SUCCESS: &str = "success";

/// Initialize all metric descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_ADD_REQUESTS,
        "Total number of /add requests by outcome"
    );
    describe_counter!(
        METRIC_HEALTH_REQUESTS,
        "Total number of /health requests"
    );
    describe_histogram!(
        METRIC_ADD_LATENCY,
        "Time spent handling /add requests in milliseconds"
    );

    debug!("Metrics initialized");
}

/// Install the Prometheus exporter with its own HTTP listener.
pub fn install_exporter(addr: SocketAddr) -> Result<()> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| ServiceError::Metrics(e.to_string()))?;

    info!("Prometheus exporter listening on {}", addr);
    Ok(())
}

/// Increment the add requests counter for an outcome.
pub fn inc_add_requests(outcome: &'static str) {
    counter!(METRIC_ADD_REQUESTS, "outcome" => outcome).increment(1);
}

/// Increment the health requests counter.
pub fn inc_health_requests() {
    counter!(METRIC_HEALTH_REQUESTS).increment(1);
}

/// RAII guard for timing operations.
/// Automatically records latency when dropped.
pub struct LatencyTimer {
    start: Instant,
    metric_name: &'static str,
}

impl LatencyTimer {
    /// Create a new latency timer for the given metric.
    pub fn new(metric_name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            metric_name,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        histogram!(self.metric_name).record(self.elapsed_ms());
    }
}

/// Create a latency timer for the add handler.
pub fn timer_add() -> LatencyTimer {
    LatencyTimer::new(METRIC_ADD_LATENCY)
}
