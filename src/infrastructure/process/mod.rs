//! External process integration

pub mod runner;

pub use runner::ProcessEngineRunner;
