//! `GET /run` handler

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use tracing::debug;

use super::error::ApiError;
use super::AppState;
use crate::domain::{GatewayError, RunRequest};

/// Forward `arg1`/`arg2` to the engine and answer with its stdout
pub async fn run_engine(
    State(state): State<AppState>,
    query: Result<Query<RunRequest>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request = match query {
        Ok(Query(request)) => request,
        Err(rejection) => {
            debug!("API: Undecodable query string: {}", rejection);
            return Err(GatewayError::missing_arguments().into());
        }
    };

    debug!("API: Run request {:?}", request);

    let stdout = state.gateway.run(request).await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        stdout,
    ))
}
