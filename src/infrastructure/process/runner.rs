//! Engine runner backed by `tokio::process`

use bytes::Bytes;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tracing::debug;

use crate::domain::shared::InvocationError;
use crate::domain::{EngineArgs, EngineOutput, EngineRunner};

/// Spawns a fixed executable with an argument vector, never through a shell.
///
/// Children are spawned with `kill_on_drop`, so a request future dropped on
/// client disconnect or wait-limit expiry takes its process down with it.
#[derive(Debug, Clone)]
pub struct ProcessEngineRunner {
    executable: PathBuf,
    timeout: Option<Duration>,
}

impl ProcessEngineRunner {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            timeout: None,
        }
    }

    /// Bound the wait for each invocation; `None` waits indefinitely
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn command_line(&self, args: &EngineArgs) -> String {
        format!("{} {} {}", self.executable.display(), args.arg1(), args.arg2())
    }
}

#[async_trait::async_trait]
impl EngineRunner for ProcessEngineRunner {
    async fn run(&self, args: &EngineArgs) -> Result<EngineOutput, InvocationError> {
        let started = Instant::now();

        let child = Command::new(&self.executable)
            .args(args.as_argv())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| InvocationError::Spawn {
                path: self.executable.clone(),
                source,
            })?;

        debug!("Spawned {} (pid {:?})", self.executable.display(), child.id());

        let waited = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| InvocationError::TimedOut {
                    command: self.command_line(args),
                    limit,
                })?,
            None => child.wait_with_output().await,
        };

        let output = waited.map_err(|source| InvocationError::Wait {
            command: self.command_line(args),
            source,
        })?;

        if !output.status.success() {
            return Err(InvocationError::Failed {
                command: self.command_line(args),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(EngineOutput {
            stdout: Bytes::from(output.stdout),
            stderr: Bytes::from(output.stderr),
            elapsed: started.elapsed(),
        })
    }

    fn describe(&self) -> String {
        self.executable.display().to_string()
    }
}
