use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unparsable timestamp: {0}")]
pub struct TimestampError(pub String);

/// One span of time attributed to an activity.
///
/// Timestamps are kept verbatim as the caller provided them so persisted
/// state round-trips byte-for-byte; only the report builder parses them.
/// A record without `end_time` is still running and is excluded from all
/// reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityInterval {
    pub activity_name: String,
    pub start_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// The whole persisted document: rewritten in full on every save, no merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub logs: Vec<ActivityInterval>,
    #[serde(default)]
    pub activities: Vec<String>,
}

/// Parses a caller-supplied timestamp into wall-clock time.
///
/// RFC 3339 input is read as the wall-clock time written in the string; the
/// offset is not applied. Plain `YYYY-MM-DDTHH:MM:SS[.fff]` is accepted too.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, TimestampError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_local());
    }
    raw.parse::<NaiveDateTime>()
        .map_err(|_| TimestampError(raw.to_string()))
}
