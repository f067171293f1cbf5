//! Gateway errors

use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

/// Gateway result type
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Message returned when either engine argument is missing or empty
pub const MISSING_ARGUMENTS_MESSAGE: &str =
    "Please provide both arg1 and arg2 in the query string.";

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Invocation(#[from] InvocationError),

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

impl GatewayError {
    pub fn missing_arguments() -> Self {
        Self::Validation(MISSING_ARGUMENTS_MESSAGE.to_string())
    }
}

/// Failure of one spawn-wait-capture cycle
#[derive(Error, Debug)]
pub enum InvocationError {
    #[error("failed to spawn {}: {source}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to collect output of {command}: {source}")]
    Wait {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command failed: {command} ({status}){}", stderr_suffix(.stderr))]
    Failed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Command timed out after {}s: {command}", .limit.as_secs())]
    TimedOut { command: String, limit: Duration },
}

impl InvocationError {
    /// Label used for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            InvocationError::Spawn { .. } => "spawn",
            InvocationError::Wait { .. } => "wait",
            InvocationError::Failed { .. } => "failed",
            InvocationError::TimedOut { .. } => "timed_out",
        }
    }
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\n{}", stderr)
    }
}
