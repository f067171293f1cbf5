//! Shared kernel - error taxonomy used by every layer

pub mod error;

pub use error::{GatewayError, InvocationError, Result, MISSING_ARGUMENTS_MESSAGE};
