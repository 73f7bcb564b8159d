use axum::{extract::rejection::JsonRejection, Json};

use crate::server::error::{validation::ValidationError, Error};

/// Unwraps a JSON request body, turning a rejected body into a 400 validation error
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Error> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => Err(ValidationError::new(rejection.body_text()).into()),
    }
}
