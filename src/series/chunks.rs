//! Splitting of long hourly series into month-sized table segments.

use crate::series::buckets::DayBuckets;
use crate::types::calendar::Month;
use log::debug;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Series with at most this many records are rendered as one segment.
pub const DEFAULT_CHUNK_THRESHOLD: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChunkKey {
    /// The whole series, used when it is short enough to show at once.
    All,
    Month(Month),
}

impl Display for ChunkKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ChunkKey::All => f.write_str("all"),
            ChunkKey::Month(month) => month.fmt(f),
        }
    }
}

/// One segment of the hourly table.
///
/// `hours` may hold one more record than the segment owns: the first record
/// of the following segment, so that a chart drawn from `hours` connects to
/// the next one. `col_span` counts only the owned records.
#[derive(Debug)]
pub struct MonthChunk<'a, T> {
    pub key: ChunkKey,
    pub hours: Vec<&'a T>,
    pub col_span: usize,
}

impl<T> Clone for MonthChunk<'_, T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            hours: self.hours.clone(),
            col_span: self.col_span,
        }
    }
}

impl<'a, T> MonthChunk<'a, T> {
    /// Records this segment owns, without the continuity point.
    pub fn owned_hours(&self) -> &[&'a T] {
        &self.hours[..self.col_span.min(self.hours.len())]
    }

    /// The borrowed first record of the next segment, if any.
    pub fn continuity_point(&self) -> Option<&'a T> {
        if self.hours.len() > self.col_span {
            self.hours.last().copied()
        } else {
            None
        }
    }
}

/// Splits a bucketed series into display segments.
///
/// With `threshold` or fewer records in total a single [`ChunkKey::All`]
/// segment is returned. Otherwise one segment per local calendar month in
/// chronological order; every segment but the last also carries the first
/// record of its successor. An empty series yields no segments.
///
/// # Examples
///
/// ```rust
/// use chrono::{Duration, TimeZone, Utc};
/// use wxdash::{bucket_by_day, chunk_by_month, ChunkKey, HourRecord};
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
/// let records: Vec<HourRecord> = (0..48)
///     .map(|h| HourRecord::at(start + Duration::hours(h)))
///     .collect();
///
/// let buckets = bucket_by_day(&records, &Utc);
/// let chunks = chunk_by_month(&buckets, 10);
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0].key.to_string(), "2024-01");
/// assert_eq!((chunks[0].hours.len(), chunks[0].col_span), (25, 24));
/// assert_eq!(chunks[1].continuity_point(), None);
///
/// assert_eq!(chunk_by_month(&buckets, 500)[0].key, ChunkKey::All);
/// ```
pub fn chunk_by_month<'a, T>(buckets: &DayBuckets<'a, T>, threshold: usize) -> Vec<MonthChunk<'a, T>> {
    let total = buckets.total_hours();
    if total == 0 {
        return Vec::new();
    }

    if total <= threshold {
        debug!("{} hourly records fit in a single segment", total);
        return vec![MonthChunk {
            key: ChunkKey::All,
            hours: buckets.records().collect(),
            col_span: total,
        }];
    }

    let mut chunks: Vec<MonthChunk<'a, T>> = Vec::new();
    for (date, hours) in buckets.iter() {
        let key = ChunkKey::Month(Month::of(date));
        match chunks.last_mut() {
            Some(chunk) if chunk.key == key => chunk.hours.extend(hours.iter().map(|h| h.record)),
            _ => chunks.push(MonthChunk {
                key,
                hours: hours.iter().map(|h| h.record).collect(),
                col_span: 0,
            }),
        }
    }

    for chunk in chunks.iter_mut() {
        chunk.col_span = chunk.hours.len();
    }
    let next_firsts: Vec<Option<&'a T>> = chunks
        .iter()
        .skip(1)
        .map(|c| c.hours.first().copied())
        .collect();
    for (chunk, next_first) in chunks.iter_mut().zip(next_firsts) {
        if let Some(record) = next_first {
            chunk.hours.push(record);
        }
    }

    debug!(
        "Split {} hourly records into {} monthly segments",
        total,
        chunks.len()
    );
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::buckets::bucket_by_day;
    use crate::types::records::HourRecord;
    use chrono::{Duration, FixedOffset, TimeZone, Utc};

    fn hourly(start: chrono::DateTime<Utc>, count: i64) -> Vec<HourRecord> {
        (0..count)
            .map(|h| HourRecord::at(start + Duration::hours(h)))
            .collect()
    }

    #[test]
    fn test_short_series_is_one_segment() {
        let rows = hourly(Utc.with_ymd_and_hms(2024, 1, 30, 0, 0, 0).unwrap(), 100);
        let chunks = chunk_by_month(&bucket_by_day(&rows, &Utc), DEFAULT_CHUNK_THRESHOLD);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].key, ChunkKey::All);
        assert_eq!(chunks[0].key.to_string(), "all");
        assert_eq!(chunks[0].hours.len(), 100);
        assert_eq!(chunks[0].col_span, 100);
        assert_eq!(chunks[0].continuity_point(), None);
    }

    #[test]
    fn test_exactly_threshold_is_one_segment() {
        let rows = hourly(Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap(), 500);
        let chunks = chunk_by_month(&bucket_by_day(&rows, &Utc), DEFAULT_CHUNK_THRESHOLD);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].key, ChunkKey::All);
    }

    #[test]
    fn test_two_months_with_continuity_point() {
        // 2024-01-20 00:00 + 501 hours ends in February.
        let rows = hourly(Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap(), 501);
        let january = rows
            .iter()
            .filter(|r| r.time < Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap())
            .count();
        let chunks = chunk_by_month(&bucket_by_day(&rows, &Utc), DEFAULT_CHUNK_THRESHOLD);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].key, ChunkKey::Month(Month::new(1, 2024)));
        assert_eq!(chunks[1].key.to_string(), "2024-02");

        assert_eq!(chunks[0].col_span, january);
        assert_eq!(chunks[0].hours.len(), january + 1);
        assert_eq!(chunks[0].owned_hours().len(), january);
        assert!(std::ptr::eq(chunks[0].continuity_point().unwrap(), chunks[1].hours[0]));

        assert_eq!(chunks[1].col_span, 501 - january);
        assert_eq!(chunks[1].hours.len(), 501 - january);
        assert_eq!(chunks[1].continuity_point(), None);
    }

    #[test]
    fn test_col_spans_cover_series() {
        let rows = hourly(Utc.with_ymd_and_hms(2023, 11, 15, 0, 0, 0).unwrap(), 24 * 90);
        let chunks = chunk_by_month(&bucket_by_day(&rows, &Utc), DEFAULT_CHUNK_THRESHOLD);
        let keys: Vec<String> = chunks.iter().map(|c| c.key.to_string()).collect();
        assert_eq!(keys, vec!["2023-11", "2023-12", "2024-01", "2024-02"]);
        assert_eq!(chunks.iter().map(|c| c.col_span).sum::<usize>(), rows.len());
    }

    #[test]
    fn test_months_follow_time_zone() {
        // 2024-01-31 20:00 UTC is already February in UTC+5.
        let rows = hourly(Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap(), 24);
        let tz = FixedOffset::east_opt(5 * 3600).unwrap();
        let chunks = chunk_by_month(&bucket_by_day(&rows, &tz), 10);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].col_span, 19);
        assert_eq!(chunks[1].col_span, 5);
    }

    #[test]
    fn test_empty_series_has_no_segments() {
        let rows: Vec<HourRecord> = Vec::new();
        assert!(chunk_by_month(&bucket_by_day(&rows, &Utc), DEFAULT_CHUNK_THRESHOLD).is_empty());
    }
}
