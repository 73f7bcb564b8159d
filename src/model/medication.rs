use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MedicationDto {
    pub id: i32,
    pub name: String,
    pub generic_name: String,
    pub dose: String,
    pub notes: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MedicationMessageDto {
    pub message: String,
    pub medication: MedicationDto,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct MedicationPayloadDto {
    pub name: Option<String>,
    pub generic_name: Option<String>,
    pub dose: Option<String>,
    pub notes: Option<String>,
}
