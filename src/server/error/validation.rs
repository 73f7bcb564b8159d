use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// A request field is missing or not in the expected format.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Validation error: {}", self);

        error_response(StatusCode::BAD_REQUEST, self.message)
    }
}
