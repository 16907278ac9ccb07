//! Dates as exchanged with clients.
//!
//! Responses render dates as calendar-strings (`Mon Jan 01 1990`). Requests
//! may supply dates in a handful of common textual forms.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serializer};

pub const CALENDAR_FORMAT: &str = "%a %b %d %Y";

/// Formats accepted for request dates, tried in order after the timestamp forms
const INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    CALENDAR_FORMAT,
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
];

pub fn to_calendar_string(date: &NaiveDate) -> String {
    date.format(CALENDAR_FORMAT).to_string()
}

/// Parses a client supplied date. Timestamps keep the calendar day in their
/// own offset
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }

    INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
}

/// For `#[serde(with = "...")]` on calendar-string fields
pub mod calendar_string {
    use super::*;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_calendar_string(date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, CALENDAR_FORMAT).map_err(de::Error::custom)
    }
}
