//! Derived meteorological quantities computed from raw station readings.
//!
//! Every function is pure and returns `None` when a reading it needs is
//! missing; callers render that as a placeholder.

use crate::normalise::round_half_away;
use crate::types::compass::CompassPoint;
use crate::types::uv_category::UvCategory;
use crate::types::weather_type::WeatherType;

// Magnus coefficients for saturation vapour pressure over liquid water.
const MAGNUS_A: f64 = 17.27;
const MAGNUS_B: f64 = 237.7;

/// Decimal places of [`dew_point`] results.
pub const DEW_POINT_PRECISION: u32 = 1;
/// Decimal places of [`feels_like`] results.
pub const FEELS_LIKE_PRECISION: u32 = 0;

/// First local hour that is no longer night.
pub const NIGHT_END_HOUR: u32 = 6;
/// First local hour of the evening night period.
pub const NIGHT_START_HOUR: u32 = 18;

/// Dew point in °C via the Magnus approximation, rounded to one decimal.
///
/// No bounds checking is done; physically implausible inputs extrapolate.
///
/// ```rust
/// use wxdash::dew_point;
///
/// assert_eq!(dew_point(Some(20.0), Some(50.0)), Some(9.3));
/// assert_eq!(dew_point(None, Some(50.0)), None);
/// ```
pub fn dew_point(temp_c: Option<f64>, relative_humidity: Option<f64>) -> Option<f64> {
    let (t, rh) = (temp_c?, relative_humidity?);
    let alpha = (MAGNUS_A * t) / (MAGNUS_B + t) + (rh / 100.0).ln();
    let dew_point_c = (MAGNUS_B * alpha) / (MAGNUS_A - alpha);
    Some(round_half_away(DEW_POINT_PRECISION, dew_point_c))
}

/// Apparent temperature in °C from the Rothfusz heat-index regression,
/// rounded to whole degrees.
///
/// The regression is only fitted for roughly 27 °C and above with at least
/// 40 % humidity. It is evaluated unconditionally so that cold or dry readings
/// keep producing the same values the dashboard has always shown.
pub fn feels_like(temp_c: Option<f64>, relative_humidity: Option<f64>) -> Option<f64> {
    let (t, rh) = (temp_c?, relative_humidity?);
    let tf = t * 1.8 + 32.0;
    let hi_f = -42.379 + 2.04901523 * tf + 10.14333127 * rh
        - 0.22475541 * tf * rh
        - 0.00683783 * tf * tf
        - 0.05481717 * rh * rh
        + 0.00122874 * tf * tf * rh
        + 0.00085282 * tf * rh * rh
        - 0.00000199 * tf * tf * rh * rh;
    Some(round_half_away(FEELS_LIKE_PRECISION, (hi_f - 32.0) * 5.0 / 9.0))
}

/// Compass point the wind blows from. A missing bearing is treated as north.
pub fn wind_direction_name(degrees: Option<f64>) -> Option<CompassPoint> {
    CompassPoint::from_degrees(degrees.unwrap_or(0.0))
}

/// Rotation angle for a wind arrow: the raw bearing, unsnapped.
pub fn wind_direction_arrow(degrees: Option<f64>) -> f64 {
    degrees.unwrap_or(0.0)
}

pub fn uv_category(uv: Option<f64>) -> UvCategory {
    UvCategory::from_index(uv)
}

pub fn weather_type(rain_rate_mm: Option<f64>, solar_radiation: Option<f64>, hour: u32) -> WeatherType {
    WeatherType::classify(rain_rate_mm, solar_radiation, hour)
}

/// Fixed local-hour night window: before 06:00 or from 18:00.
pub fn is_night(hour: u32) -> bool {
    hour < NIGHT_END_HOUR || hour >= NIGHT_START_HOUR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dew_point_reference() {
        assert_eq!(dew_point(Some(20.0), Some(50.0)), Some(9.3));
        assert_eq!(dew_point(Some(30.0), Some(100.0)), Some(30.0));
    }

    #[test]
    fn test_dew_point_missing_inputs() {
        assert_eq!(dew_point(None, Some(50.0)), None);
        assert_eq!(dew_point(Some(20.0), None), None);
        assert_eq!(dew_point(None, None), None);
    }

    #[test]
    fn test_dew_point_below_freezing_extrapolates() {
        let dp = dew_point(Some(-5.0), Some(80.0)).unwrap();
        assert!(dp < -5.0 && dp > -10.0, "dew point {dp}");
    }

    #[test]
    fn test_feels_like_hot_humid() {
        // 89.6 °F at 70 % evaluates to ~104.7 °F.
        assert_eq!(feels_like(Some(32.0), Some(70.0)), Some(40.0));
    }

    #[test]
    fn test_feels_like_is_whole_degrees() {
        let value = feels_like(Some(28.3), Some(55.5)).unwrap();
        assert_eq!(value, value.round());
    }

    #[test]
    fn test_feels_like_missing_inputs() {
        assert_eq!(feels_like(None, Some(70.0)), None);
        assert_eq!(feels_like(Some(32.0), None), None);
    }

    #[test]
    fn test_wind_direction_helpers() {
        assert_eq!(wind_direction_name(Some(0.0)), Some(CompassPoint::N));
        assert_eq!(wind_direction_name(Some(359.0)), Some(CompassPoint::N));
        assert_eq!(wind_direction_name(Some(22.5)), Some(CompassPoint::NE));
        assert_eq!(wind_direction_name(Some(44.0)), Some(CompassPoint::NE));
        assert_eq!(wind_direction_name(None), Some(CompassPoint::N));
        assert_eq!(wind_direction_name(Some(f64::NAN)), None);
        assert_eq!(wind_direction_arrow(Some(123.4)), 123.4);
        assert_eq!(wind_direction_arrow(None), 0.0);
    }

    #[test]
    fn test_night_window() {
        assert!(is_night(0));
        assert!(is_night(5));
        assert!(!is_night(6));
        assert!(!is_night(17));
        assert!(is_night(18));
        assert!(is_night(23));
    }

    #[test]
    fn test_wrappers_delegate() {
        assert_eq!(uv_category(Some(7.9)), UvCategory::High);
        assert_eq!(weather_type(Some(0.0), Some(500.0), 3), WeatherType::Clear);
    }
}
