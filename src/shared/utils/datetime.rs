//! Wall-clock timestamps in the shape of an HTML `datetime-local` input
//!
//! Jobs are scheduled in the business's local time with no zone attached,
//! written as `2025-02-01T10:00` (seconds optional).
use chrono::{NaiveDateTime, ParseError, Timelike};

const MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";
const SECOND_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn parse_local_datetime(text: &str) -> Result<NaiveDateTime, ParseError> {
    let text = text.trim();
    NaiveDateTime::parse_from_str(text, MINUTE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, SECOND_FORMAT))
}

/// Minute precision unless the value carries seconds
pub fn format_local_datetime(value: &NaiveDateTime) -> String {
    if value.second() == 0 && value.nanosecond() == 0 {
        value.format(MINUTE_FORMAT).to_string()
    } else {
        value.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

/// `#[serde(with = "local_datetime")]` adapter
pub mod local_datetime {
    use super::{format_local_datetime, parse_local_datetime};
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_local_datetime(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_local_datetime(&text).map_err(serde::de::Error::custom)
    }
}
