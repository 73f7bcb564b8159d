use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct InsuranceCardDto {
    pub id: i32,
    pub subscriber_name: String,
    pub member_id: String,
    pub group_number: String,
    pub plan_number: String,
    pub plan_type: String,
    pub purpose: String,
    pub notes: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceCardMessageDto {
    pub message: String,
    pub insurance_card: InsuranceCardDto,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct InsuranceCardPayloadDto {
    pub subscriber_name: Option<String>,
    pub member_id: Option<String>,
    pub group_number: Option<String>,
    pub plan_number: Option<String>,
    pub plan_type: Option<String>,
    pub purpose: Option<String>,
    pub notes: Option<String>,
}
