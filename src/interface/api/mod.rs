//! API interface implementations

pub mod error;
pub mod health;
pub mod metrics_handler;
pub mod router;
pub mod run_handler;

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::application::GatewayService;

pub use error::ApiError;
pub use router::build_router;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<GatewayService>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(gateway: Arc<GatewayService>) -> Self {
        Self {
            gateway,
            started_at: Utc::now(),
        }
    }
}
