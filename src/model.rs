use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{validation_error, ApiResult, Error};

/// One calendar entry extracted from free text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Event {
    /// Short summary of the entry
    pub title: String,
    /// Longer free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// The date of the event (YYYY-MM-DD)
    pub date: String,
    /// Start time if known (HH:MM)
    #[serde(default)]
    pub start_time: Option<String>,
    /// End time if known (HH:MM)
    #[serde(default)]
    pub end_time: Option<String>,
    /// Whether the event spans the whole day
    #[serde(default)]
    pub all_day: bool,
    /// Where the event takes place
    #[serde(default)]
    pub location: Option<String>,
    /// Reminder lead time in minutes
    #[serde(default)]
    pub reminder_minutes_before: Option<u32>,
    /// True when no time could be determined from the text
    #[serde(default)]
    pub time_unspecified: bool,
}

impl Event {
    /// Validate a single JSON object from the model reply against the event schema.
    ///
    /// Serde enforces the field set and types (unknown keys are rejected), then
    /// the string fields are checked against their expected formats.
    pub fn from_value(value: Value) -> ApiResult<Self> {
        let event: Event =
            serde_json::from_value(value).map_err(|e| Error::Validation(e.to_string()))?;

        if event.title.trim().is_empty() {
            return Err(validation_error("title must not be empty"));
        }

        NaiveDate::parse_from_str(&event.date, "%Y-%m-%d")
            .map_err(|_| Error::Validation(format!("invalid date: {}", event.date)))?;

        for time in [&event.start_time, &event.end_time].into_iter().flatten() {
            NaiveTime::parse_from_str(time, "%H:%M")
                .map_err(|_| Error::Validation(format!("invalid time: {}", time)))?;
        }

        Ok(event)
    }
}

/// Request body for the parse endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ParseRequest {
    /// Free text describing one or more events
    pub text: String,
}

/// Response body for the parse endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ParseResponse {
    /// The events extracted from the request text
    pub events: Vec<Event>,
}
