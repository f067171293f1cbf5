//! Prometheus metrics recorder and gateway instruments

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

pub const REQUESTS_TOTAL: &str = "gateway_requests_total";
pub const INVOCATION_DURATION: &str = "engine_invocation_duration_seconds";
pub const INVOCATIONS_IN_FLIGHT: &str = "engine_invocations_in_flight";

/// Install the global Prometheus recorder
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full(INVOCATION_DURATION.to_string()),
            &[0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0],
        )?
        .install_recorder()?;

    describe_counter!(
        REQUESTS_TOTAL,
        "Total number of /run requests by outcome"
    );
    describe_histogram!(
        INVOCATION_DURATION,
        "Wall-clock duration of successful engine invocations in seconds"
    );
    describe_gauge!(
        INVOCATIONS_IN_FLIGHT,
        "Number of engine processes currently running"
    );

    Ok(handle)
}

/// Record the outcome of one `/run` request
pub fn record_request_outcome(outcome: &'static str) {
    counter!(REQUESTS_TOTAL, "outcome" => outcome).increment(1);
}

pub fn record_invocation_duration(elapsed: Duration) {
    histogram!(INVOCATION_DURATION).record(elapsed.as_secs_f64());
}

/// Keeps the in-flight gauge raised while alive
pub struct InFlightGuard(());

impl InFlightGuard {
    pub fn enter() -> Self {
        gauge!(INVOCATIONS_IN_FLIGHT).increment(1.0);
        Self(())
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        gauge!(INVOCATIONS_IN_FLIGHT).decrement(1.0);
    }
}
