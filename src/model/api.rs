use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response for mutations which carry no resource
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}
