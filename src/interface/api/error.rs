//! Mapping of gateway errors onto plain-text HTTP responses

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::domain::GatewayError;

/// Error returned by API handlers
#[derive(Debug)]
pub struct ApiError(GatewayError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
            GatewayError::Invocation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self.0 {
            GatewayError::Validation(message) => message.clone(),
            GatewayError::Invocation(err) => format!("Error: {}", err),
            GatewayError::Unavailable(_) => self.0.to_string(),
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}
