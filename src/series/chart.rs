//! Series and axis bounds for the hourly charts.

use crate::types::records::HourRecord;
use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;

/// A plottable reading of an [`HourRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    TempC,
    FeelsLike,
    TempInC,
    FeelsLikeIn,
    RainRate,
    TotalRain,
    WindSpeed,
    WindGust,
    Humidity,
    HumidityIn,
    Uv,
    SolarRadiation,
}

impl Metric {
    pub fn value(self, record: &HourRecord) -> Option<f64> {
        match self {
            Metric::TempC => record.temp_c,
            Metric::FeelsLike => record.feels_like,
            Metric::TempInC => record.temp_in_c,
            Metric::FeelsLikeIn => record.feels_like_in,
            Metric::RainRate => record.rain_rate_mm,
            Metric::TotalRain => record.total_rain_mm,
            Metric::WindSpeed => record.wind_speed_kph,
            Metric::WindGust => record.wind_gust_kph,
            Metric::Humidity => record.humidity,
            Metric::HumidityIn => record.humidity_in,
            Metric::Uv => record.uv,
            Metric::SolarRadiation => record.solar_radiation,
        }
    }
}

/// Column-wise view of a run of hours, ready to hand to a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub times: Vec<DateTime<Utc>>,
    columns: Vec<(Metric, Vec<Option<f64>>)>,
}

impl ChartSeries {
    /// Extracts `metrics` from `hours`, one value per hour; gaps stay `None`.
    pub fn extract(hours: &[&HourRecord], metrics: &[Metric]) -> Self {
        Self {
            times: hours.iter().map(|h| h.time).collect(),
            columns: metrics
                .iter()
                .map(|&metric| (metric, hours.iter().map(|h| metric.value(h)).collect()))
                .collect(),
        }
    }

    pub fn get(&self, metric: Metric) -> Option<&[Option<f64>]> {
        self.columns
            .iter()
            .find(|(m, _)| *m == metric)
            .map(|(_, values)| values.as_slice())
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Values of every requested metric in turn, for axis scaling.
    pub fn values<'s>(&'s self, metrics: &'s [Metric]) -> impl Iterator<Item = Option<f64>> + 's {
        metrics
            .iter()
            .filter_map(move |&m| self.get(m))
            .flatten()
            .copied()
    }
}

/// Bounds of a chart's value axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

// Charts of empty series still need a sensible frame.
const EMPTY_RAIN_AXIS: AxisRange = AxisRange { min: 0.0, max: 50.0 };
const EMPTY_TEMPERATURE_AXIS: AxisRange = AxisRange { min: 0.0, max: 30.0 };
const MIN_AXIS_TOP: f64 = 1.0;

fn present(values: impl IntoIterator<Item = Option<f64>>) -> Vec<OrderedFloat<f64>> {
    values
        .into_iter()
        .flatten()
        .filter(|v| !v.is_nan())
        .map(OrderedFloat)
        .collect()
}

impl AxisRange {
    /// Rain axes start at zero and reach at least 1 mm.
    ///
    /// ```rust
    /// use wxdash::AxisRange;
    ///
    /// assert_eq!(AxisRange::for_rain(Vec::<Option<f64>>::new()), AxisRange { min: 0.0, max: 50.0 });
    /// assert_eq!(AxisRange::for_rain([Some(0.2), None]), AxisRange { min: 0.0, max: 1.0 });
    /// assert_eq!(AxisRange::for_rain([Some(12.5)]), AxisRange { min: 0.0, max: 12.5 });
    /// ```
    pub fn for_rain(values: impl IntoIterator<Item = Option<f64>>) -> Self {
        match present(values).into_iter().max() {
            None => EMPTY_RAIN_AXIS,
            Some(top) => AxisRange {
                min: 0.0,
                max: top.0.max(MIN_AXIS_TOP),
            },
        }
    }

    /// Temperature axes span the data, with the top at least 1 °C.
    pub fn for_temperature(values: impl IntoIterator<Item = Option<f64>>) -> Self {
        let values = present(values);
        match (values.iter().min(), values.iter().max()) {
            (Some(bottom), Some(top)) => AxisRange {
                min: bottom.0,
                max: top.0.max(MIN_AXIS_TOP),
            },
            _ => EMPTY_TEMPERATURE_AXIS,
        }
    }
}
