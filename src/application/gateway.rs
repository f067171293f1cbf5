//! Gateway service - one request, at most one engine invocation

use bytes::Bytes;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, info_span, warn, Instrument};

use crate::domain::{EngineRunner, GatewayError, InvocationId, Result, RunRequest};
use crate::infrastructure::metrics::{
    record_invocation_duration, record_request_outcome, InFlightGuard,
};

/// Validates requests, admits them and drives the engine runner
pub struct GatewayService {
    runner: Arc<dyn EngineRunner>,
    limiter: Option<Arc<Semaphore>>,
}

impl GatewayService {
    pub fn new(runner: Arc<dyn EngineRunner>) -> Self {
        Self {
            runner,
            limiter: None,
        }
    }

    /// Bound the number of in-flight invocations; excess requests wait
    pub fn with_max_concurrent(mut self, max_concurrent: Option<usize>) -> Self {
        self.limiter = max_concurrent
            .filter(|limit| *limit > 0)
            .map(|limit| Arc::new(Semaphore::new(limit)));
        self
    }

    pub fn engine(&self) -> String {
        self.runner.describe()
    }

    /// Permits currently free, `None` when unbounded
    pub fn available_permits(&self) -> Option<usize> {
        self.limiter.as_ref().map(|limiter| limiter.available_permits())
    }

    /// Validate `request`, run the engine and return its stdout.
    ///
    /// Validation failures never reach the runner.
    pub async fn run(&self, request: RunRequest) -> Result<Bytes> {
        let args = match request.validate() {
            Ok(args) => args,
            Err(e) => {
                record_request_outcome("validation_error");
                return Err(e);
            }
        };

        let id = InvocationId::new();
        let span = info_span!("invocation", id = %id, engine = %self.runner.describe());

        async move {
            let _permit = match &self.limiter {
                Some(limiter) => Some(
                    limiter
                        .clone()
                        .acquire_owned()
                        .await
                        .map_err(|e| GatewayError::Unavailable(e.to_string()))?,
                ),
                None => None,
            };

            let _in_flight = InFlightGuard::enter();
            info!("Invoking engine with arg1={:?} arg2={:?}", args.arg1(), args.arg2());

            match self.runner.run(&args).await {
                Ok(output) => {
                    if output.has_diagnostics() {
                        warn!("Engine stderr: {}", output.stderr_lossy());
                    }
                    record_invocation_duration(output.elapsed);
                    record_request_outcome("success");
                    info!(
                        "Engine completed in {:?} ({} bytes of stdout)",
                        output.elapsed,
                        output.stdout.len()
                    );
                    Ok(output.stdout)
                }
                Err(e) => {
                    error!("Engine invocation failed ({}): {}", e.kind(), e);
                    record_request_outcome("invocation_error");
                    Err(GatewayError::Invocation(e))
                }
            }
        }
        .instrument(span)
        .await
    }
}
