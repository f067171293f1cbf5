//! Liveness endpoint

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub engine: String,
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: i64,
    /// Free invocation slots, absent when concurrency is unbounded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_slots: Option<usize>,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let now = Utc::now();

    Json(HealthResponse {
        status: "ok".to_string(),
        engine: state.gateway.engine(),
        started_at: state.started_at,
        uptime_seconds: (now - state.started_at).num_seconds().max(0),
        available_slots: state.gateway.available_permits(),
    })
}
