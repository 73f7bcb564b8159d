use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MedicalContactDto {
    pub id: i32,
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub hospital: String,
    pub specialty: String,
    pub phone_number: String,
    pub notes: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicalContactMessageDto {
    pub message: String,
    pub medical_contact: MedicalContactDto,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct MedicalContactPayloadDto {
    pub title: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub hospital: Option<String>,
    pub specialty: Option<String>,
    pub phone_number: Option<String>,
    pub notes: Option<String>,
}
