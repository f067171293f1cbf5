//! Application layer - Use cases and application services
//!
//! This layer orchestrates domain objects to fulfill use cases:
//! validating a run request, admitting it and invoking the engine.

pub mod gateway;

pub use gateway::GatewayService;
