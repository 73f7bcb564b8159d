use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("You must be logged in to complete this action.")]
    NotLoggedIn,
    #[error("You are already signed in.")]
    AlreadyLoggedIn,
    #[error("Invalid account login credentials provided.")]
    InvalidLogin,
    /// The session points at an account or credential that no longer exists, or at a
    /// credential belonging to another account. The session has already been cleared.
    #[error("Session was not recognized.")]
    SessionNotRecognized,
    #[error("An account with username {0} already exists.")]
    UsernameTaken(String),
    #[error("An account with username {0} does not exist.")]
    UsernameNotFound(String),
    #[error("Your account does not have any credential with username {0}")]
    CredentialNotInAccount(String),
    /// The session account was deleted between the guards and the handler body.
    #[error("Account ID {0:?} not found in database despite having an active session")]
    AccountNotInDatabase(i32),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotLoggedIn | Self::InvalidLogin => StatusCode::UNAUTHORIZED,
            Self::AlreadyLoggedIn | Self::CredentialNotInAccount(_) => StatusCode::FORBIDDEN,
            Self::UsernameNotFound(_) => StatusCode::NOT_FOUND,
            Self::UsernameTaken(_) => StatusCode::CONFLICT,
            Self::SessionNotRecognized => {
                tracing::warn!("{}", self);

                return error_response(StatusCode::INTERNAL_SERVER_ERROR, self.to_string());
            }
            Self::AccountNotInDatabase(_) => return InternalServerError(self).into_response(),
        };

        tracing::debug!("{}", self);

        error_response(status, self.to_string())
    }
}
