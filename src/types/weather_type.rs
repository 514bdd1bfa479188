//! Defines the `WeatherType` enum, the coarse sky condition shown as an icon
//! and label next to every hourly column.

use std::fmt;
use std::fmt::{Display, Formatter};

/// Solar radiation (W/m²) below which a daytime hour counts as overcast.
pub const OVERCAST_SOLAR_THRESHOLD: f64 = 100.0;

/// Coarse sky condition derived from rain rate, solar radiation and time of day.
///
/// The station has no sky camera or cloud sensor, so the condition is a
/// heuristic over the readings it does have. See [`WeatherType::classify`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum WeatherType {
    /// Any measurable rain rate.
    Rain,
    /// Night hour without rain. Solar radiation is meaningless at night.
    Clear,
    /// Daytime hour without rain and little sunlight reaching the sensor.
    Overcast,
    /// Daytime hour without rain and plenty of sunlight.
    MostlyClear,
}

impl WeatherType {
    /// Classifies an hour.
    ///
    /// Priority order: rain, then night, then solar radiation. Missing
    /// readings are treated as zero, so an hour without a rain gauge reading
    /// is never `Rain` and a daytime hour without a radiation reading is
    /// `Overcast`.
    ///
    /// # Arguments
    ///
    /// * `rain_rate_mm`: Rain rate for the hour, if reported.
    /// * `solar_radiation`: Solar radiation in W/m², if reported.
    /// * `hour`: Local hour of day (0-23) in the dashboard's time zone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wxdash::WeatherType;
    ///
    /// // Rain wins regardless of sun or hour
    /// assert_eq!(WeatherType::classify(Some(1.0), Some(500.0), 12), WeatherType::Rain);
    /// // Night wins over a solar reading
    /// assert_eq!(WeatherType::classify(Some(0.0), Some(500.0), 3), WeatherType::Clear);
    /// assert_eq!(WeatherType::classify(None, Some(40.0), 10), WeatherType::Overcast);
    /// assert_eq!(WeatherType::classify(None, Some(640.0), 10), WeatherType::MostlyClear);
    /// ```
    pub fn classify(rain_rate_mm: Option<f64>, solar_radiation: Option<f64>, hour: u32) -> Self {
        let rain = rain_rate_mm.unwrap_or(0.0);
        let solar = solar_radiation.unwrap_or(0.0);
        if rain > 0.0 {
            WeatherType::Rain
        } else if crate::metrics::is_night(hour) {
            WeatherType::Clear
        } else if solar < OVERCAST_SOLAR_THRESHOLD {
            WeatherType::Overcast
        } else {
            WeatherType::MostlyClear
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WeatherType::Rain => "Rain",
            WeatherType::Clear => "Clear",
            WeatherType::Overcast => "Overcast",
            WeatherType::MostlyClear => "Mostly Clear",
        }
    }
}

impl Display for WeatherType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
