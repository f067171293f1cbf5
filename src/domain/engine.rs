//! Engine port

use super::invocation::{EngineArgs, EngineOutput};
use super::shared::InvocationError;

/// Runs the external engine once per call
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait EngineRunner: Send + Sync {
    /// Spawn the engine with `args` as its argument vector and wait for it to exit.
    ///
    /// Only a successful exit yields `Ok`; stderr is returned alongside stdout
    /// and is never treated as a failure on its own.
    async fn run(&self, args: &EngineArgs) -> Result<EngineOutput, InvocationError>;

    /// Human-readable description of the engine, e.g. its path
    fn describe(&self) -> String;
}
