//! Prometheus exposition for HTTP traffic.
//!
//! Two series are exported, both labeled by `method`, `path` (the matched
//! route template) and `status`:
//! - `http_requests_total` - counter
//! - `http_request_duration_seconds` - histogram

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};
use thiserror::Error;

pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
pub const HTTP_REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";

const LATENCY_BUCKETS: &[f64] = &[
    0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Failed to build metrics exporter: {0}")]
    Build(#[from] BuildError),
}

fn builder() -> Result<PrometheusBuilder, MetricsError> {
    Ok(PrometheusBuilder::new().set_buckets_for_metric(
        Matcher::Suffix("duration_seconds".to_string()),
        LATENCY_BUCKETS,
    )?)
}

/// Installs the process-wide recorder. Call once at startup.
pub fn install_recorder() -> Result<PrometheusHandle, MetricsError> {
    let handle = builder()?.install_recorder()?;
    register_metrics();
    tracing::info!("Prometheus recorder installed");
    Ok(handle)
}

/// A handle to a recorder that is not installed globally. Rendering it yields
/// an empty exposition; used where the global recorder is already taken.
pub fn detached_handle() -> Result<PrometheusHandle, MetricsError> {
    Ok(builder()?.build_recorder().handle())
}

fn register_metrics() {
    describe_counter!(HTTP_REQUESTS_TOTAL, "Total number of HTTP requests");
    describe_histogram!(
        HTTP_REQUEST_DURATION_SECONDS,
        "Time taken to serve an HTTP request"
    );
}
