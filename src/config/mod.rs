//! Configuration management

use ::config::{ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable naming an optional configuration file
pub const CONFIG_FILE_ENV: &str = "ENGINE_GATEWAY_CONFIG";

/// Prefix for environment overrides, e.g. `ENGINE_GATEWAY__SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "ENGINE_GATEWAY";

/// Base name of the engine executable expected beside the gateway binary
pub const DEFAULT_ENGINE_NAME: &str = "engine";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Explicit engine path; resolved beside the gateway binary when unset
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Maximum wait for one invocation, `0` waits indefinitely
    pub timeout_secs: u64,

    /// Upper bound on in-flight invocations, unbounded when unset
    #[serde(default)]
    pub max_concurrent: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            engine: EngineConfig {
                path: None,
                timeout_secs: 30,
                max_concurrent: None,
            },
        }
    }
}

impl Config {
    /// Load defaults, then the optional file named by `ENGINE_GATEWAY_CONFIG`,
    /// then `ENGINE_GATEWAY__*` environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = ::config::Config::builder()
            .add_source(::config::Config::try_from(&Config::default())?);

        if let Ok(path) = std::env::var(CONFIG_FILE_ENV) {
            builder = builder.add_source(File::with_name(&path));
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        let ip: IpAddr = self.server.host.parse()?;
        Ok((ip, self.server.port).into())
    }
}

impl EngineConfig {
    /// Resolve the engine path once at startup.
    ///
    /// Relative configured paths and the default are both anchored at the
    /// directory containing the running gateway binary.
    pub fn resolve_path(&self) -> std::io::Result<PathBuf> {
        let base = std::env::current_exe()?
            .parent()
            .map(PathBuf::from)
            .unwrap_or_default();

        Ok(match &self.path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => base.join(path),
            None => base.join(default_engine_file_name()),
        })
    }

    /// `None` when the wait is unbounded
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

/// `engine` with the platform executable suffix (`engine.exe` on Windows)
pub fn default_engine_file_name() -> String {
    format!("{}{}", DEFAULT_ENGINE_NAME, std::env::consts::EXE_SUFFIX)
}
