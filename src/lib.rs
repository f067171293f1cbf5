//! Engine Gateway - an HTTP front for a pre-built engine executable
//!
//! `GET /run?arg1=..&arg2=..` spawns the configured engine with the two
//! values as its argument vector and answers with the engine's stdout.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interface;

// Re-export commonly used types
pub use domain::shared::error::{GatewayError, InvocationError, Result};
