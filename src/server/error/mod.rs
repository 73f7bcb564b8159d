//! Error types for the medlog server.
//!
//! Each domain (session & authentication, resource access, request validation, configuration)
//! has its own error enum implementing `IntoResponse`. They are aggregated into [`Error`] so
//! that guards, services and controllers can all propagate failures with `?`; the first guard
//! to fail decides the response.

pub mod auth;
pub mod config;
pub mod resource;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, resource::ResourceError,
        validation::ValidationError,
    },
};

/// Main error type for the medlog server.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (login state, stale sessions, credential conflicts)
/// - Resource errors (missing records, ownership, lifecycle conflicts)
/// - Validation errors (malformed request fields)
/// - External library errors (database, session store)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or session error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Resource existence, ownership or lifecycle error.
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// Malformed or missing request field.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating inconsistent stored data or a bug.
    #[error("Internal error: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Failed to bind or serve the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors carry their own status mapping, every other error is logged and returned as
/// a generic 500.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds the `{ "error": ... }` JSON response used by every failing request.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
