use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::entry::Condition;

/// A single trend data point derived from a log entry
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TrendPointDto {
    /// ID of the entry the point was derived from
    pub entry_id: i32,
    /// Display title of the entry
    pub item: String,
    pub label: Condition,
    pub value: i32,
    /// Formatted as `YYYY/MM/DD`
    pub date: String,
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TrendQuery {
    /// Only return points for this condition
    pub condition: Option<String>,
}
