use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::{error::error_response, model::resource::ResourceKind};

/// Failures of the existence, ownership and lifecycle guards.
///
/// `id` is kept as the raw string from the request so that syntactically invalid ids are
/// reported the same way as ids which match no record.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("{kind} with ID {id} does not exist.")]
    NotFound { kind: ResourceKind, id: String },
    #[error("Cannot modify other accounts' {}.", kind.plural())]
    NotOwner { kind: ResourceKind, id: String },
    #[error("{kind} with ID {id} is already deactivated.")]
    AlreadyDeactivated { kind: ResourceKind, id: String },
    #[error("Entry detail must reference an existing {kind}: no {kind} with ID {id} exists.")]
    ReferenceNotFound { kind: ResourceKind, id: String },
    #[error("Entry detail references a {kind} with ID {id} that doesn't belong to you.")]
    ReferenceNotOwned { kind: ResourceKind, id: String },
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound { .. } | Self::ReferenceNotFound { .. } => StatusCode::NOT_FOUND,
            Self::NotOwner { .. } | Self::ReferenceNotOwned { .. } => StatusCode::FORBIDDEN,
            Self::AlreadyDeactivated { .. } => StatusCode::CONFLICT,
        };

        tracing::debug!("{}", self);

        error_response(status, self.to_string())
    }
}
