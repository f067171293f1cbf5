//! Invocation value objects

use bytes::Bytes;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

use super::shared::{GatewayError, Result};

/// Invocation identifier, used for log correlation only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvocationId(Uuid);

impl InvocationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InvocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InvocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inbound query parameters of `GET /run`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RunRequest {
    pub arg1: Option<String>,
    pub arg2: Option<String>,
}

impl RunRequest {
    pub fn new(arg1: impl Into<String>, arg2: impl Into<String>) -> Self {
        Self {
            arg1: Some(arg1.into()),
            arg2: Some(arg2.into()),
        }
    }

    /// Both arguments must be present and non-empty
    pub fn validate(self) -> Result<EngineArgs> {
        match (non_empty(self.arg1), non_empty(self.arg2)) {
            (Some(arg1), Some(arg2)) => Ok(EngineArgs { arg1, arg2 }),
            _ => Err(GatewayError::missing_arguments()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Validated argument vector handed to the engine, in order and unmodified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineArgs {
    arg1: String,
    arg2: String,
}

impl EngineArgs {
    pub fn arg1(&self) -> &str {
        &self.arg1
    }

    pub fn arg2(&self) -> &str {
        &self.arg2
    }

    pub fn as_argv(&self) -> [&str; 2] {
        [&self.arg1, &self.arg2]
    }
}

/// Captured result of an engine run that exited successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOutput {
    pub stdout: Bytes,
    pub stderr: Bytes,
    pub elapsed: Duration,
}

impl EngineOutput {
    pub fn has_diagnostics(&self) -> bool {
        !self.stderr.is_empty()
    }

    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}
