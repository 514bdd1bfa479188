//! Backend endpoints and the instant ranges they are queried with.

use crate::WxError;
use chrono::{
    DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, Offset, SecondsFormat, TimeZone, Utc,
};
use log::warn;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Hours of history shown on the today view.
pub const TODAY_WINDOW_HOURS: i64 = 12;
/// Hours of history the past view opens with.
pub const PAST_DEFAULT_HOURS: i64 = 24;

const LOCAL_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const LOCAL_INPUT_FORMAT_NO_SECONDS: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Today,
    Hourly,
    Past,
    Monthly,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Today => "/api/today",
            Endpoint::Hourly => "/api/hourly",
            Endpoint::Past => "/api/past",
            Endpoint::Monthly => "/api/monthly",
        }
    }

    /// Path with the range appended as a query string, if there is one.
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use wxdash::{Endpoint, QueryRange};
    ///
    /// let range = QueryRange::new(
    ///     Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
    /// );
    /// assert_eq!(
    ///     Endpoint::Past.url(Some(&range)),
    ///     "/api/past?start=2024-01-01T00:00:00Z&end=2024-01-02T00:00:00Z"
    /// );
    /// assert_eq!(Endpoint::Today.url(None), "/api/today");
    /// ```
    pub fn url(self, range: Option<&QueryRange>) -> String {
        match range {
            Some(range) => format!("{}?{}", self.path(), range.query_string()),
            None => self.path().to_owned(),
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A `[start, end]` window of instants sent as `start`/`end` query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl QueryRange {
    /// Inverted ranges are accepted but logged; check [`QueryRange::is_valid`]
    /// before applying one.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        if start > end {
            warn!("Query range starts at {} after it ends at {}", start, end);
        }
        Self { start, end }
    }

    /// The `hours` leading up to `now`.
    pub fn last_hours(now: DateTime<Utc>, hours: i64) -> Self {
        Self::new(now - Duration::hours(hours), now)
    }

    pub fn today(now: DateTime<Utc>) -> Self {
        Self::last_hours(now, TODAY_WINDOW_HOURS)
    }

    pub fn past_default(now: DateTime<Utc>) -> Self {
        Self::last_hours(now, PAST_DEFAULT_HOURS)
    }

    /// Whole local calendar years: Jan 1 00:00:00 of `start_year` through
    /// Dec 31 23:59:59 of `end_year` in `tz`.
    ///
    /// # Errors
    ///
    /// [`WxError::YearOutOfRange`] if a year is outside chrono's range.
    pub fn years<Tz: TimeZone>(start_year: i32, end_year: i32, tz: &Tz) -> Result<Self, WxError> {
        let start = local_instant(year_bound(start_year, 1, 1, 0, 0, 0)?, tz)?;
        let end = local_instant(year_bound(end_year, 12, 31, 23, 59, 59)?, tz)?;
        Ok(Self::new(start, end))
    }

    /// `start <= end`; the view only applies valid ranges.
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    /// `start=<instant>&end=<instant>` with RFC 3339 UTC instants.
    pub fn query_string(&self) -> String {
        format!(
            "start={}&end={}",
            self.start.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.end.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }
}

fn year_bound(year: i32, month: u32, day: u32, h: u32, m: u32, s: u32) -> Result<NaiveDateTime, WxError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(h, m, s))
        .ok_or(WxError::YearOutOfRange(year))
}

/// Resolves a wall-clock time in `tz`.
///
/// An ambiguous time takes the earlier instant. A time inside a gap is read
/// with the offset in force before the gap, which lands it past the gap
/// (`02:30` on a spring-forward night becomes `03:30`).
fn local_instant<Tz: TimeZone>(local: NaiveDateTime, tz: &Tz) -> Result<DateTime<Utc>, WxError> {
    let resolved = match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt.with_timezone(&Utc)),
        LocalResult::None => tz
            .from_local_datetime(&(local - Duration::days(1)))
            .earliest()
            .and_then(|before| before.offset().fix().from_local_datetime(&local).single())
            .map(|dt| dt.with_timezone(&Utc)),
    };
    resolved.ok_or(WxError::NonexistentLocalTime(local))
}

/// Parses a date-time field value (`YYYY-MM-DDTHH:MM[:SS]`) as local time in `tz`.
///
/// Editing views keep their previous value when this fails. Times skipped or
/// repeated by a daylight-saving change resolve as in [`QueryRange::years`].
///
/// ```rust
/// use chrono::{FixedOffset, TimeZone, Utc};
/// use wxdash::parse_local_datetime;
///
/// let tz = FixedOffset::east_opt(11 * 3600).unwrap();
/// let parsed = parse_local_datetime("2024-03-10T09:30", &tz).unwrap();
/// assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 9, 22, 30, 0).unwrap());
/// assert!(parse_local_datetime("tomorrow", &tz).is_err());
/// ```
pub fn parse_local_datetime<Tz: TimeZone>(value: &str, tz: &Tz) -> Result<DateTime<Utc>, WxError> {
    let local = NaiveDateTime::parse_from_str(value, LOCAL_INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, LOCAL_INPUT_FORMAT_NO_SECONDS))
        .map_err(|e| WxError::InvalidTimestamp(value.to_owned(), e))?;
    local_instant(local, tz)
}

/// Renders an instant as a local date-time field value, `YYYY-MM-DDTHH:MM:SS`.
pub fn format_local_datetime<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    instant.with_timezone(tz).format("%Y-%m-%dT%H:%M:%S").to_string()
}
