//! Decoding of backend response bodies into normalised records.

use crate::normalise::Normalise;
use crate::types::records::{HourRecord, MonthRecord, TodayData};
use crate::WxError;
use log::debug;
use serde::de::DeserializeOwned;

fn decode_list<T: DeserializeOwned + Normalise>(json: &str, what: &str) -> Result<Vec<T>, WxError> {
    let records: Vec<T> = serde_json::from_str(json)?;
    debug!("Decoded {} {} records", records.len(), what);
    Ok(records.iter().map(Normalise::normalise).collect())
}

/// Decodes an `/api/past` or `/api/hourly` body: a JSON array of hour records.
///
/// # Errors
///
/// [`WxError::Decode`] if the body is not an array of hour records.
///
/// # Examples
///
/// ```rust
/// use wxdash::decode_hourly;
///
/// let hours = decode_hourly(r#"[{"time": "2023-10-01T03:00Z", "tempc": 24.5072719495244}]"#).unwrap();
/// assert_eq!(hours[0].temp_c, Some(24.5));
/// assert_eq!(hours[0].humidity, None);
/// ```
pub fn decode_hourly(json: &str) -> Result<Vec<HourRecord>, WxError> {
    decode_list(json, "hourly")
}

/// Decodes an `/api/monthly` body.
pub fn decode_monthly(json: &str) -> Result<Vec<MonthRecord>, WxError> {
    decode_list(json, "monthly")
}

/// Decodes an `/api/today` body: a single current reading plus daily extremes.
pub fn decode_today(json: &str) -> Result<TodayData, WxError> {
    let today: TodayData = serde_json::from_str(json)?;
    Ok(today.normalise())
}
