//! Table model behind the hourly views (today, past range).
//!
//! An [`HourlyTable`] buckets a series by local day, splits it into
//! month-sized segments for charting and answers the per-column questions a
//! renderer asks: what label does this column get, is it night, is it "now".

use crate::metrics::is_night;
use crate::series::buckets::{bucket_by_day, DayBuckets};
use crate::series::chunks::{chunk_by_month, MonthChunk, DEFAULT_CHUNK_THRESHOLD};
use crate::series::downsample::{downsample, DEFAULT_MAX_POINTS};
use crate::types::records::{HourRecord, Observation};
use crate::types::weather_type::WeatherType;
use bon::bon;
use chrono::{NaiveDate, TimeZone};
use std::num::NonZeroUsize;

/// One hour column of the table.
#[derive(Debug)]
pub struct HourSlot<'a, T> {
    pub record: &'a T,
    pub day: NaiveDate,
    /// Local hour of day, 0-23.
    pub hour: u32,
    /// Whether this is the final column of the table.
    pub is_last: bool,
}

impl<T> Clone for HourSlot<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for HourSlot<'_, T> {}

impl HourSlot<'_, HourRecord> {
    pub fn weather_type(&self) -> WeatherType {
        WeatherType::classify(self.record.rain_rate_mm, self.record.solar_radiation, self.hour)
    }
}

#[derive(Debug)]
pub struct HourlyTable<'a, T> {
    buckets: DayBuckets<'a, T>,
    chunks: Vec<MonthChunk<'a, T>>,
    max_chart_points: NonZeroUsize,
    supports_now: bool,
}

#[bon]
impl<'a, T: Observation> HourlyTable<'a, T> {
    /// Builds the table model for `records` as seen from `timezone`.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.chunk_threshold(usize)`: Series longer than this are split into
    ///   monthly segments. Defaults to [`DEFAULT_CHUNK_THRESHOLD`].
    /// * `.max_chart_points(NonZeroUsize)`: Upper bound on points per chart
    ///   segment. Defaults to [`DEFAULT_MAX_POINTS`].
    /// * `.supports_now(bool)`: Label the final column "Now". Defaults to `false`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chrono::{Duration, FixedOffset, TimeZone, Utc};
    /// use wxdash::{HourRecord, HourlyTable};
    ///
    /// let start = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
    /// let records: Vec<HourRecord> = (0..30)
    ///     .map(|h| HourRecord::at(start + Duration::hours(h)))
    ///     .collect();
    ///
    /// let table = HourlyTable::builder()
    ///     .records(&records)
    ///     .timezone(FixedOffset::east_opt(2 * 3600).unwrap())
    ///     .supports_now(true)
    ///     .build();
    ///
    /// let slots = table.slots();
    /// assert_eq!(table.column_label(&slots[0]), "2:00");
    /// assert_eq!(table.column_label(slots.last().unwrap()), "Now");
    /// assert_eq!(table.header_spans().len(), 2);
    /// ```
    #[builder]
    pub fn new<Tz: TimeZone>(
        records: &'a [T],
        timezone: Tz,
        chunk_threshold: Option<usize>,
        max_chart_points: Option<NonZeroUsize>,
        supports_now: Option<bool>,
    ) -> Self {
        let buckets = bucket_by_day(records, &timezone);
        let chunks = chunk_by_month(&buckets, chunk_threshold.unwrap_or(DEFAULT_CHUNK_THRESHOLD));
        Self {
            buckets,
            chunks,
            max_chart_points: max_chart_points.unwrap_or(DEFAULT_MAX_POINTS),
            supports_now: supports_now.unwrap_or(false),
        }
    }

    /// `true` when there is nothing to show ("No data").
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn buckets(&self) -> &DayBuckets<'a, T> {
        &self.buckets
    }

    /// Local days with their records sorted by hour, chronologically.
    pub fn days(&self) -> Vec<(NaiveDate, Vec<&'a T>)> {
        self.buckets
            .iter()
            .map(|(date, hours)| (date, hours.iter().map(|h| h.record).collect()))
            .collect()
    }

    /// `(day, column count)` for the day header row.
    pub fn header_spans(&self) -> Vec<(NaiveDate, usize)> {
        self.buckets.header_spans()
    }

    /// Every hour column in table order.
    pub fn slots(&self) -> Vec<HourSlot<'a, T>> {
        let total = self.buckets.total_hours();
        self.buckets
            .iter()
            .flat_map(|(day, hours)| {
                hours.iter().map(move |h| (day, *h))
            })
            .enumerate()
            .map(|(i, (day, h))| HourSlot {
                record: h.record,
                day,
                hour: h.hour,
                is_last: i + 1 == total,
            })
            .collect()
    }

    /// Only the final column of a table that supports it is "now".
    pub fn is_now(&self, slot: &HourSlot<'_, T>) -> bool {
        self.supports_now && slot.is_last
    }

    /// Hour column header: `Now` or `H:00` in local time.
    pub fn column_label(&self, slot: &HourSlot<'_, T>) -> String {
        if self.is_now(slot) {
            "Now".to_owned()
        } else {
            format!("{}:00", slot.hour)
        }
    }

    pub fn is_night_column(&self, slot: &HourSlot<'_, T>) -> bool {
        is_night(slot.hour)
    }

    /// Chart segments; a single one unless the series is long.
    pub fn chunks(&self) -> &[MonthChunk<'a, T>] {
        &self.chunks
    }

    /// The hours of `chunk` thinned to at most the configured point count,
    /// continuity point included.
    pub fn chart_points(&self, chunk: &MonthChunk<'a, T>) -> Vec<&'a T> {
        downsample(&chunk.hours, self.max_chart_points)
    }
}
