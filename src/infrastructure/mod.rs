//! Infrastructure layer - Technical implementations
//!
//! This layer contains:
//! - The process-backed engine runner
//! - The Prometheus metrics recorder

pub mod metrics;
pub mod process;
