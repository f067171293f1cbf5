//! Domain layer - request validation, invocation values and the engine port
//!
//! This layer contains:
//! - Value Objects: `RunRequest`, `EngineArgs`, `EngineOutput`
//! - Ports: `EngineRunner`
//! - The shared error taxonomy

pub mod engine;
pub mod invocation;
pub mod shared;

// Re-export commonly used types
pub use engine::EngineRunner;
pub use invocation::{EngineArgs, EngineOutput, InvocationId, RunRequest};
pub use shared::{GatewayError, InvocationError, Result};
