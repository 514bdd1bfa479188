//! Record types returned by the weather-station backend.
//!
//! Field names on the wire are the station's raw measurement names (`tempc`,
//! `humidityin`, `rainratemm`, ...); the Rust fields spell them out. A missing
//! reading is always `None` and is never conflated with a zero reading.

use crate::types::calendar::{Month, Year};
use crate::types::timestamp::{self, lenient};
use crate::WxError;
use chrono::{DateTime, Datelike, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Anything stamped with the instant it was observed at.
pub trait Observation {
    fn time(&self) -> DateTime<Utc>;
}

impl<T: Observation + ?Sized> Observation for &T {
    fn time(&self) -> DateTime<Utc> {
        (**self).time()
    }
}

/// One hourly observation, averaged over the hour by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourRecord {
    #[serde(with = "lenient", alias = "_time")]
    pub time: DateTime<Utc>,
    /// Outdoor temperature, °C.
    #[serde(rename = "tempc", skip_serializing_if = "Option::is_none")]
    pub temp_c: Option<f64>,
    /// Indoor temperature, °C.
    #[serde(rename = "tempinc", skip_serializing_if = "Option::is_none")]
    pub temp_in_c: Option<f64>,
    /// Outdoor relative humidity, %.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    /// Indoor relative humidity, %.
    #[serde(rename = "humidityin", skip_serializing_if = "Option::is_none")]
    pub humidity_in: Option<f64>,
    #[serde(rename = "windspeedkph", skip_serializing_if = "Option::is_none")]
    pub wind_speed_kph: Option<f64>,
    #[serde(rename = "windgustkph", skip_serializing_if = "Option::is_none")]
    pub wind_gust_kph: Option<f64>,
    /// Direction the wind blows from, degrees clockwise from north.
    #[serde(rename = "winddir", skip_serializing_if = "Option::is_none")]
    pub wind_dir: Option<f64>,
    #[serde(rename = "rainratemm", skip_serializing_if = "Option::is_none")]
    pub rain_rate_mm: Option<f64>,
    /// Rain since local midnight, mm.
    #[serde(rename = "totalrainmm", skip_serializing_if = "Option::is_none")]
    pub total_rain_mm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uv: Option<f64>,
    /// Solar radiation, W/m².
    #[serde(rename = "solarradiation", skip_serializing_if = "Option::is_none")]
    pub solar_radiation: Option<f64>,
    #[serde(rename = "feelslike", skip_serializing_if = "Option::is_none")]
    pub feels_like: Option<f64>,
    #[serde(rename = "feelslikein", skip_serializing_if = "Option::is_none")]
    pub feels_like_in: Option<f64>,
}

impl HourRecord {
    /// A record with only its timestamp set.
    pub fn at(time: DateTime<Utc>) -> Self {
        Self {
            time,
            temp_c: None,
            temp_in_c: None,
            humidity: None,
            humidity_in: None,
            wind_speed_kph: None,
            wind_gust_kph: None,
            wind_dir: None,
            rain_rate_mm: None,
            total_rain_mm: None,
            uv: None,
            solar_radiation: None,
            feels_like: None,
            feels_like_in: None,
        }
    }
}

impl Observation for HourRecord {
    fn time(&self) -> DateTime<Utc> {
        self.time
    }
}

/// The latest observation plus the running extremes of the current day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodayData {
    #[serde(flatten)]
    pub current: HourRecord,
    #[serde(rename = "mintemp", alias = "minTemp", skip_serializing_if = "Option::is_none")]
    pub min_temp: Option<f64>,
    #[serde(rename = "maxtemp", alias = "maxTemp", skip_serializing_if = "Option::is_none")]
    pub max_temp: Option<f64>,
    #[serde(rename = "mintempin", alias = "minTempIn", skip_serializing_if = "Option::is_none")]
    pub min_temp_in: Option<f64>,
    #[serde(rename = "maxtempin", alias = "maxTempIn", skip_serializing_if = "Option::is_none")]
    pub max_temp_in: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunset: Option<String>,
    #[serde(rename = "maxuv", alias = "maxUV", skip_serializing_if = "Option::is_none")]
    pub max_uv: Option<f64>,
}

impl TodayData {
    pub fn new(current: HourRecord) -> Self {
        Self {
            current,
            min_temp: None,
            max_temp: None,
            min_temp_in: None,
            max_temp_in: None,
            sunrise: None,
            sunset: None,
            max_uv: None,
        }
    }

    /// Wall-clock time of sunrise, if the backend reported one.
    ///
    /// A blank value means none was reported.
    ///
    /// # Errors
    ///
    /// Returns [`WxError::InvalidClockTime`] when the reported value cannot be parsed.
    pub fn sunrise_time(&self) -> Result<Option<NaiveTime>, WxError> {
        clock_field(self.sunrise.as_deref())
    }

    /// Wall-clock time of sunset, if the backend reported one.
    ///
    /// A blank value means none was reported.
    ///
    /// # Errors
    ///
    /// Returns [`WxError::InvalidClockTime`] when the reported value cannot be parsed.
    pub fn sunset_time(&self) -> Result<Option<NaiveTime>, WxError> {
        clock_field(self.sunset.as_deref())
    }
}

fn clock_field(value: Option<&str>) -> Result<Option<NaiveTime>, WxError> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(timestamp::parse_clock_time)
        .transpose()
}

impl Observation for TodayData {
    fn time(&self) -> DateTime<Utc> {
        self.current.time
    }
}

/// Aggregates for one calendar month. Every value is present; the backend
/// reports zero when a month had no qualifying readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthRecord {
    /// First instant of the month, UTC.
    #[serde(with = "lenient")]
    pub time: DateTime<Utc>,

    pub humidity: f64,
    pub humidity_absolute_max: f64,
    pub humidity_absolute_min: f64,
    pub humidity_mean_max: f64,
    pub humidity_mean_min: f64,

    #[serde(rename = "humidityin")]
    pub humidity_in: f64,
    #[serde(rename = "humidityin_absolute_max")]
    pub humidity_in_absolute_max: f64,
    #[serde(rename = "humidityin_absolute_min")]
    pub humidity_in_absolute_min: f64,
    #[serde(rename = "humidityin_mean_max")]
    pub humidity_in_mean_max: f64,
    #[serde(rename = "humidityin_mean_min")]
    pub humidity_in_mean_min: f64,

    #[serde(rename = "solarradiation")]
    pub solar_radiation: f64,
    #[serde(rename = "solarradiation_absolute_max")]
    pub solar_radiation_absolute_max: f64,
    #[serde(rename = "solarradiation_absolute_min")]
    pub solar_radiation_absolute_min: f64,
    #[serde(rename = "solarradiation_mean_max")]
    pub solar_radiation_mean_max: f64,
    #[serde(rename = "solarradiation_mean_min")]
    pub solar_radiation_mean_min: f64,

    #[serde(rename = "tempc")]
    pub temp_c: f64,
    #[serde(rename = "tempc_absolute_max")]
    pub temp_c_absolute_max: f64,
    #[serde(rename = "tempc_absolute_min")]
    pub temp_c_absolute_min: f64,
    #[serde(rename = "tempc_mean_max")]
    pub temp_c_mean_max: f64,
    #[serde(rename = "tempc_mean_min")]
    pub temp_c_mean_min: f64,

    #[serde(rename = "tempinc")]
    pub temp_in_c: f64,
    #[serde(rename = "tempinc_absolute_max")]
    pub temp_in_c_absolute_max: f64,
    #[serde(rename = "tempinc_absolute_min")]
    pub temp_in_c_absolute_min: f64,
    #[serde(rename = "tempinc_mean_max")]
    pub temp_in_c_mean_max: f64,
    #[serde(rename = "tempinc_mean_min")]
    pub temp_in_c_mean_min: f64,

    #[serde(rename = "totalrainmm")]
    pub total_rain_mm: f64,
    pub uv_absolute: f64,
    pub uv_mean: f64,
    #[serde(rename = "raindayscount")]
    pub rain_days_count: f64,
}

impl MonthRecord {
    /// The calendar month this record aggregates, taken from the UTC date of `time`.
    pub fn month(&self) -> Month {
        Month::of(self.time.date_naive())
    }

    pub fn year(&self) -> Year {
        Year(self.time.year())
    }
}

impl Observation for MonthRecord {
    fn time(&self) -> DateTime<Utc> {
        self.time
    }
}
