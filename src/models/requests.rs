use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::timezone::TimezoneDescriptor;

/// Body of `POST /timezones/convert`. Every field is required, but they are
/// optional here so a missing one becomes a validation error instead of a
/// deserialization failure.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    pub from_timezone: Option<String>,
    pub to_timezone: Option<String>,
    pub date_time: Option<String>,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ZoneNow {
    pub timezone: TimezoneDescriptor,
    pub current_time: String,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResponse {
    pub from_timezone: TimezoneDescriptor,
    pub to_timezone: TimezoneDescriptor,
    pub date_time: String,
    pub utc_instant: DateTime<Utc>,
    pub converted_instant: DateTime<Utc>,
}
