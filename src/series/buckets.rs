//! Grouping of an hourly series into local calendar days.

use crate::types::records::Observation;
use chrono::{NaiveDate, TimeZone, Timelike};
use log::{debug, warn};
use std::collections::{BTreeMap, HashSet};

/// A record placed at its local hour of day.
#[derive(Debug)]
pub struct LocalHour<'a, T> {
    pub hour: u32,
    pub record: &'a T,
}

// Manual impls: derives would needlessly require `T: Clone`.
impl<T> Clone for LocalHour<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for LocalHour<'_, T> {}

/// Hourly records grouped by local calendar day.
///
/// Days iterate in chronological order; within a day records are sorted by
/// local hour, keeping input order for records that share an hour (the
/// repeated hour of a daylight-saving fall-back, for instance).
///
/// Built by [`bucket_by_day`]. Holds references into the source slice and is
/// rebuilt whenever the source changes.
#[derive(Debug)]
pub struct DayBuckets<'a, T> {
    days: BTreeMap<NaiveDate, Vec<LocalHour<'a, T>>>,
    total: usize,
}

impl<T> Clone for DayBuckets<'_, T> {
    fn clone(&self) -> Self {
        Self {
            days: self.days.clone(),
            total: self.total,
        }
    }
}

impl<'a, T> DayBuckets<'a, T> {
    /// Day keys in chronological order.
    pub fn day_keys(&self) -> Vec<NaiveDate> {
        self.days.keys().copied().collect()
    }

    /// Records of one day, sorted by local hour.
    pub fn day(&self, date: NaiveDate) -> Option<&[LocalHour<'a, T>]> {
        self.days.get(&date).map(Vec::as_slice)
    }

    /// `(day, hours)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[LocalHour<'a, T>])> + '_ {
        self.days.iter().map(|(date, hours)| (*date, hours.as_slice()))
    }

    /// All records in table order: by day, then by hour.
    pub fn records(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.days.values().flatten().map(|h| h.record)
    }

    /// Number of records per day, for day header column spans.
    pub fn header_spans(&self) -> Vec<(NaiveDate, usize)> {
        self.days.iter().map(|(date, hours)| (*date, hours.len())).collect()
    }

    /// Number of days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of records across all days.
    pub fn total_hours(&self) -> usize {
        self.total
    }
}

/// Buckets records by their calendar day in `tz`.
///
/// # Arguments
///
/// * `records`: The hourly series, in any order.
/// * `tz`: Time zone whose calendar defines day boundaries and hours of day.
///
/// # Examples
///
/// ```rust
/// use chrono::Utc;
/// use wxdash::{bucket_by_day, parse_timestamp, HourRecord};
///
/// let records: Vec<HourRecord> = ["2023-10-01T03:00Z", "2023-10-01T01:00Z", "2023-10-02T00:00Z"]
///     .iter()
///     .map(|t| HourRecord::at(parse_timestamp(t).unwrap()))
///     .collect();
///
/// let buckets = bucket_by_day(&records, &Utc);
/// let keys: Vec<String> = buckets.day_keys().iter().map(|d| d.to_string()).collect();
/// assert_eq!(keys, ["2023-10-01", "2023-10-02"]);
///
/// let first_day: Vec<u32> = buckets.iter().next().unwrap().1.iter().map(|h| h.hour).collect();
/// assert_eq!(first_day, [1, 3]);
/// ```
pub fn bucket_by_day<'a, T, Tz>(records: &'a [T], tz: &Tz) -> DayBuckets<'a, T>
where
    T: Observation,
    Tz: TimeZone,
{
    let mut days: BTreeMap<NaiveDate, Vec<LocalHour<'a, T>>> = BTreeMap::new();
    let mut seen = HashSet::with_capacity(records.len());
    let mut duplicates = 0usize;

    for record in records {
        let instant = record.time();
        if !seen.insert(instant) {
            duplicates += 1;
        }
        let local = instant.with_timezone(tz);
        days.entry(local.date_naive()).or_default().push(LocalHour {
            hour: local.hour(),
            record,
        });
    }

    for hours in days.values_mut() {
        // `sort_by_key` is stable, which keeps same-hour records in input order.
        hours.sort_by_key(|h| h.hour);
    }

    if duplicates > 0 {
        warn!("Hourly series contains {} duplicate timestamps", duplicates);
    }
    debug!(
        "Bucketed {} hourly records into {} days",
        records.len(),
        days.len()
    );

    DayBuckets {
        days,
        total: records.len(),
    }
}
