//! Parsing of the ISO-8601 instants carried by API records.
//!
//! The backend emits RFC 3339 timestamps, but hand-written fixtures and older
//! payloads drop the seconds (`2023-10-01T03:00Z`). Both forms are accepted.

use crate::WxError;
use chrono::{DateTime, FixedOffset, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

const NO_SECONDS_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%#z"];

/// Parses an ISO-8601 instant into a UTC `DateTime`.
///
/// Accepts full RFC 3339 (`2023-10-01T03:00:00Z`, `2023-10-01T05:00:00+02:00`)
/// and the same forms without seconds (`2023-10-01T03:00Z`).
///
/// # Errors
///
/// Returns [`WxError::InvalidTimestamp`] if the string matches none of the
/// supported forms.
///
/// # Examples
///
/// ```
/// use wxdash::parse_timestamp;
///
/// let full = parse_timestamp("2023-10-01T03:00:00Z").unwrap();
/// let short = parse_timestamp("2023-10-01T03:00Z").unwrap();
/// assert_eq!(full, short);
/// assert!(parse_timestamp("yesterday").is_err());
/// ```
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, WxError> {
    let rfc3339_err = match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => return Ok(dt.with_timezone(&Utc)),
        Err(e) => e,
    };

    // `%#z` does not accept a bare `Z`, so normalise it to an explicit offset first.
    let with_offset = match value.strip_suffix('Z') {
        Some(stripped) => format!("{stripped}+00:00"),
        None => value.to_owned(),
    };
    NO_SECONDS_FORMATS
        .iter()
        .find_map(|format| DateTime::<FixedOffset>::parse_from_str(&with_offset, format).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| WxError::InvalidTimestamp(value.to_owned(), rfc3339_err))
}

/// Parses a sunrise/sunset style clock value.
///
/// The backend has shipped these as `HH:MM`, `HH:MM:SS`, naive date-times and
/// full RFC 3339 instants over time; only the wall-clock part is kept.
pub fn parse_clock_time(value: &str) -> Result<NaiveTime, WxError> {
    let mut last_err = match NaiveTime::parse_from_str(value, "%H:%M") {
        Ok(time) => return Ok(time),
        Err(e) => e,
    };
    for format in ["%H:%M:%S", "%H:%M:%S%.f"] {
        match NaiveTime::parse_from_str(value, format) {
            Ok(time) => return Ok(time),
            Err(e) => last_err = e,
        }
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        match NaiveDateTime::parse_from_str(value, format) {
            Ok(dt) => return Ok(dt.time()),
            Err(e) => last_err = e,
        }
    }
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => Ok(dt.time()),
        Err(_) => Err(WxError::InvalidClockTime(value.to_owned(), last_err)),
    }
}

/// Renders an optional clock time as `HH:MM`, or `--` when there is none.
pub fn format_clock_time(time: Option<NaiveTime>) -> String {
    match time {
        Some(t) => t.format("%H:%M").to_string(),
        None => "--".to_owned(),
    }
}

// serde adapters for `#[serde(with = "...")]` on record `time` fields.
pub(crate) mod lenient {
    use super::*;

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let dt = parse_timestamp("2023-10-01T05:00:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2023, 10, 1, 3, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_without_seconds() {
        let zulu = parse_timestamp("2023-10-01T03:00Z").unwrap();
        let offset = parse_timestamp("2023-10-01T04:00+01:00").unwrap();
        assert_eq!(zulu, offset);
        assert_eq!(zulu.hour(), 3);
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let dt = parse_timestamp("2025-02-01T00:00:00.000Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_malformed_timestamp() {
        match parse_timestamp("2023-13-45") {
            Err(WxError::InvalidTimestamp(raw, _)) => assert_eq!(raw, "2023-13-45"),
            other => panic!("Expected InvalidTimestamp, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_clock_time_forms() {
        let expected = NaiveTime::from_hms_opt(6, 12, 0).unwrap();
        assert_eq!(parse_clock_time("06:12").unwrap(), expected);
        assert_eq!(parse_clock_time("06:12:00").unwrap(), expected);
        assert_eq!(parse_clock_time("2024-03-10T06:12:00").unwrap(), expected);
        assert_eq!(parse_clock_time("2024-03-10T06:12:00+11:00").unwrap(), expected);
        assert!(parse_clock_time("sunrise").is_err());
    }

    #[test]
    fn test_format_clock_time() {
        assert_eq!(format_clock_time(NaiveTime::from_hms_opt(18, 5, 59)), "18:05");
        assert_eq!(format_clock_time(None), "--");
    }
}
