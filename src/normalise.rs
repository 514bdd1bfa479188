//! Fixed-precision rounding of raw backend readings.
//!
//! The backend reports hourly means straight out of the aggregation query
//! (`24.5072719495244`); these are rounded once on arrival so every view shows
//! the same digits.

use crate::types::records::{HourRecord, MonthRecord, TodayData};
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places for temperatures, humidity, wind, UV and radiation.
pub const DEFAULT_PRECISION: u32 = 1;
/// Decimal places for rain rate and accumulated rain.
pub const RAIN_PRECISION: u32 = 2;

/// Rounds to `places` decimals, halves away from zero.
///
/// The exact decimal value of `value` is rounded, the same as printing it with
/// `places` fixed digits and reading it back: `19.95` is stored just below the
/// half and becomes `19.9`, while an exact binary half like `0.25` goes to `0.3`.
/// Non-finite values and magnitudes beyond `Decimal` are returned unchanged.
///
/// ```rust
/// use wxdash::round_half_away;
///
/// assert_eq!(round_half_away(1, 19.95), 19.9);
/// assert_eq!(round_half_away(1, 0.25), 0.3);
/// ```
pub fn round_half_away(places: u32, value: f64) -> f64 {
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };
    let rounded = exact
        .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
        .to_string()
        .parse::<f64>()
        .unwrap_or(value);
    // Avoid handing out negative zero for values like -0.04.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Rounds an optional reading; a missing reading stays missing.
///
/// ```rust
/// use wxdash::round_to;
///
/// assert_eq!(round_to(1, Some(24.5072719495244)), Some(24.5));
/// assert_eq!(round_to(1, Some(-2.25)), Some(-2.3));
/// assert_eq!(round_to(2, None), None);
/// ```
pub fn round_to(places: u32, value: Option<f64>) -> Option<f64> {
    value.map(|v| round_half_away(places, v))
}

/// Rounding of a decoded record to display precision.
///
/// Implementations must be idempotent.
pub trait Normalise {
    fn normalise(&self) -> Self;
}

impl Normalise for HourRecord {
    fn normalise(&self) -> Self {
        Self {
            time: self.time,
            temp_c: round_to(DEFAULT_PRECISION, self.temp_c),
            temp_in_c: round_to(DEFAULT_PRECISION, self.temp_in_c),
            humidity: round_to(DEFAULT_PRECISION, self.humidity),
            humidity_in: round_to(DEFAULT_PRECISION, self.humidity_in),
            wind_speed_kph: round_to(DEFAULT_PRECISION, self.wind_speed_kph),
            wind_gust_kph: round_to(DEFAULT_PRECISION, self.wind_gust_kph),
            wind_dir: self.wind_dir,
            rain_rate_mm: round_to(RAIN_PRECISION, self.rain_rate_mm),
            total_rain_mm: round_to(RAIN_PRECISION, self.total_rain_mm),
            uv: round_to(DEFAULT_PRECISION, self.uv),
            solar_radiation: round_to(DEFAULT_PRECISION, self.solar_radiation),
            feels_like: round_to(DEFAULT_PRECISION, self.feels_like),
            feels_like_in: round_to(DEFAULT_PRECISION, self.feels_like_in),
        }
    }
}

impl Normalise for TodayData {
    fn normalise(&self) -> Self {
        Self {
            current: self.current.normalise(),
            min_temp: round_to(DEFAULT_PRECISION, self.min_temp),
            max_temp: round_to(DEFAULT_PRECISION, self.max_temp),
            min_temp_in: round_to(DEFAULT_PRECISION, self.min_temp_in),
            max_temp_in: round_to(DEFAULT_PRECISION, self.max_temp_in),
            sunrise: self.sunrise.clone(),
            sunset: self.sunset.clone(),
            max_uv: round_to(DEFAULT_PRECISION, self.max_uv),
        }
    }
}

impl Normalise for MonthRecord {
    fn normalise(&self) -> Self {
        let r = |v: f64| round_half_away(DEFAULT_PRECISION, v);
        Self {
            time: self.time,
            humidity: r(self.humidity),
            humidity_absolute_max: r(self.humidity_absolute_max),
            humidity_absolute_min: r(self.humidity_absolute_min),
            humidity_mean_max: r(self.humidity_mean_max),
            humidity_mean_min: r(self.humidity_mean_min),
            humidity_in: r(self.humidity_in),
            humidity_in_absolute_max: r(self.humidity_in_absolute_max),
            humidity_in_absolute_min: r(self.humidity_in_absolute_min),
            humidity_in_mean_max: r(self.humidity_in_mean_max),
            humidity_in_mean_min: r(self.humidity_in_mean_min),
            solar_radiation: r(self.solar_radiation),
            solar_radiation_absolute_max: r(self.solar_radiation_absolute_max),
            solar_radiation_absolute_min: r(self.solar_radiation_absolute_min),
            solar_radiation_mean_max: r(self.solar_radiation_mean_max),
            solar_radiation_mean_min: r(self.solar_radiation_mean_min),
            temp_c: r(self.temp_c),
            temp_c_absolute_max: r(self.temp_c_absolute_max),
            temp_c_absolute_min: r(self.temp_c_absolute_min),
            temp_c_mean_max: r(self.temp_c_mean_max),
            temp_c_mean_min: r(self.temp_c_mean_min),
            temp_in_c: r(self.temp_in_c),
            temp_in_c_absolute_max: r(self.temp_in_c_absolute_max),
            temp_in_c_absolute_min: r(self.temp_in_c_absolute_min),
            temp_in_c_mean_max: r(self.temp_in_c_mean_max),
            temp_in_c_mean_min: r(self.temp_in_c_mean_min),
            total_rain_mm: r(self.total_rain_mm),
            uv_absolute: r(self.uv_absolute),
            uv_mean: r(self.uv_mean),
            rain_days_count: r(self.rain_days_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_hour() -> HourRecord {
        let mut record = HourRecord::at(Utc.with_ymd_and_hms(2025, 2, 3, 4, 0, 0).unwrap());
        record.temp_c = Some(24.5072719495244);
        record.humidity = Some(80.3242433964282);
        record.rain_rate_mm = Some(0.123456);
        record.total_rain_mm = Some(9.57614768473896);
        record.wind_dir = Some(187.333333);
        record.solar_radiation = Some(146.950643781414);
        record.uv = Some(0.0);
        record
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_half_away(1, 0.25), 0.3);
        assert_eq!(round_half_away(1, -0.25), -0.3);
        assert_eq!(round_half_away(0, 2.5), 3.0);
        assert_eq!(round_half_away(0, -2.5), -3.0);
        assert_eq!(round_half_away(2, 1.234), 1.23);
    }

    #[test]
    fn test_round_uses_exact_stored_value() {
        // Each of these is stored slightly below its printed half.
        assert_eq!(round_half_away(1, 19.95), 19.9);
        assert_eq!(round_half_away(1, 1.45), 1.4);
        assert_eq!(round_half_away(2, 2.675), 2.67);
        assert_eq!(round_half_away(2, 19.985), 19.98);
        assert_eq!(round_half_away(1, -1.45), -1.4);
        // Exact binary halves still go away from zero.
        assert_eq!(round_half_away(2, 0.125), 0.13);
        assert_eq!(round_half_away(2, -0.125), -0.13);
    }

    #[test]
    fn test_round_passes_through_non_finite() {
        assert!(round_half_away(1, f64::NAN).is_nan());
        assert_eq!(round_half_away(1, f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_round_never_yields_negative_zero() {
        let rounded = round_half_away(1, -0.04);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
    }

    #[test]
    fn test_hour_record_precision_per_field() {
        let normalised = sample_hour().normalise();
        assert_eq!(normalised.temp_c, Some(24.5));
        assert_eq!(normalised.humidity, Some(80.3));
        assert_eq!(normalised.rain_rate_mm, Some(0.12));
        assert_eq!(normalised.total_rain_mm, Some(9.58));
        assert_eq!(normalised.solar_radiation, Some(147.0));
        // Bearings are kept at full precision for the arrow.
        assert_eq!(normalised.wind_dir, Some(187.333333));
    }

    #[test]
    fn test_missing_stays_missing_and_zero_stays_zero() {
        let normalised = sample_hour().normalise();
        assert_eq!(normalised.temp_in_c, None);
        assert_eq!(normalised.feels_like, None);
        assert_eq!(normalised.uv, Some(0.0));
    }

    #[test]
    fn test_normalise_is_idempotent() {
        let once = sample_hour().normalise();
        assert_eq!(once.normalise(), once);

        let mut today = TodayData::new(sample_hour());
        today.max_temp = Some(31.96);
        today.sunrise = Some("06:12".to_owned());
        let today_once = today.normalise();
        assert_eq!(today_once.max_temp, Some(32.0));
        assert_eq!(today_once.sunrise.as_deref(), Some("06:12"));
        assert_eq!(today_once.normalise(), today_once);
    }

    #[test]
    fn test_idempotent_across_many_values() {
        for i in -2000..2000 {
            let v = i as f64 * 0.0137;
            for places in [0, 1, 2] {
                let once = round_half_away(places, v);
                assert_eq!(round_half_away(places, once), once, "value {v} places {places}");
            }
        }
    }
}
