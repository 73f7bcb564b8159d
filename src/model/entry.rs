use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What a log entry records
///
/// `Appointment` and `Medication` entries store the id of a medical contact or medication in
/// their `detail` field, `Other` entries store free text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Appointment,
    Medication,
    Other,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Appointment => "appointment",
            Self::Medication => "medication",
            Self::Other => "other",
        }
    }
}

impl FromStr for EntryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "appointment" => Ok(Self::Appointment),
            "medication" => Ok(Self::Medication),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown entry type: {}", s)),
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The condition an entry (and the trend derived from it) measures
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Pain,
    Cognition,
    Happiness,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pain => "pain",
            Self::Cognition => "cognition",
            Self::Happiness => "happiness",
        }
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pain" => Ok(Self::Pain),
            "cognition" => Ok(Self::Cognition),
            "happiness" => Ok(Self::Happiness),
            _ => Err(format!("Unknown condition: {}", s)),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct EntryDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Free text, or the id of the referenced medical contact or medication
    pub detail: String,
    /// Display title derived from `detail`
    pub title: String,
    pub condition: Condition,
    pub scale: i32,
    pub notes: String,
    /// Formatted as `YYYY/MM/DD`
    pub date: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct EntryMessageDto {
    pub message: String,
    pub entry: EntryDto,
}

/// Body for creating or updating an entry
///
/// On update any omitted field keeps its stored value.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct EntryPayloadDto {
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
    pub detail: Option<String>,
    pub condition: Option<String>,
    pub scale: Option<i32>,
    pub notes: Option<String>,
    /// Formatted as `YYYY-MM-DD`
    pub date: Option<String>,
}
