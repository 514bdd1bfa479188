mod colour;
mod decode;
mod error;
mod hourly_table;
mod metrics;
mod normalise;
mod range;
mod series;
mod stats;
mod types;

pub use error::WxError;

pub use decode::{decode_hourly, decode_monthly, decode_today};
pub use normalise::{round_half_away, round_to, Normalise, DEFAULT_PRECISION, RAIN_PRECISION};

pub use metrics::*;

pub use colour::{colour_for, colour_for_name, range_pos, ColourKind, ColourStyle, Rgb};

pub use series::buckets::{bucket_by_day, DayBuckets, LocalHour};
pub use series::chart::{AxisRange, ChartSeries, Metric};
pub use series::chunks::{chunk_by_month, ChunkKey, MonthChunk, DEFAULT_CHUNK_THRESHOLD};
pub use series::downsample::{downsample, downsample_default, DEFAULT_MAX_POINTS};
pub use series::filter::RowFilter;

pub use hourly_table::{HourSlot, HourlyTable};
pub use stats::{is_valid_year_range, Aggregate, StatsRow, StatsTable, YearStats, FIRST_STATION_YEAR};

pub use range::{
    format_local_datetime, parse_local_datetime, Endpoint, QueryRange, PAST_DEFAULT_HOURS,
    TODAY_WINDOW_HOURS,
};

pub use types::calendar::{Month, Year};
pub use types::compass::CompassPoint;
pub use types::records::{HourRecord, MonthRecord, Observation, TodayData};
pub use types::timestamp::{format_clock_time, parse_clock_time, parse_timestamp};
pub use types::uv_category::{Severity, UvCategory};
pub use types::weather_type::{WeatherType, OVERCAST_SOLAR_THRESHOLD};
