//! Naive local wall-clock date-times.
//!
//! Every date-time in the calendar is a local wall-clock value with minute
//! precision. There is no timezone or DST handling. The canonical string form
//! is `YYYY-MM-DDTHH:mm`, used both internally and in event payloads.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CalendarError, CalendarResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Years that fit the four-digit `YYYY` field.
const MIN_YEAR: i32 = 0;
const MAX_YEAR: i32 = 9999;

/// Time pinned onto the end of an all-day event.
pub fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(NaiveTime::MIN)
}

/// A local date-time truncated to the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDateTime(NaiveDateTime);

impl LocalDateTime {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        LocalDateTime(minute_precision(date.and_time(time)))
    }

    /// Parse a date-time string.
    ///
    /// Accepts the canonical `YYYY-MM-DDTHH:mm`, a trailing `:ss`, an RFC 3339
    /// offset (the offset is dropped and the wall-clock kept), or a bare
    /// `YYYY-MM-DD`, which is read as midnight.
    pub fn parse(s: &str) -> CalendarResult<Self> {
        let s = s.trim();
        let value = Self::parse_any(s)?;
        check_year(value.date(), s)?;
        Ok(value)
    }

    fn parse_any(s: &str) -> CalendarResult<Self> {
        if !s.contains('T') {
            let date = parse_date(s)?;
            return Ok(LocalDateTime::new(date, NaiveTime::MIN));
        }

        if let Ok(dt) = NaiveDateTime::parse_from_str(s, DATETIME_FORMAT) {
            return Ok(LocalDateTime(dt));
        }

        for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(LocalDateTime(minute_precision(dt)));
            }
        }

        DateTime::parse_from_rfc3339(s)
            .map(|dt| LocalDateTime(minute_precision(dt.naive_local())))
            .map_err(|_| {
                CalendarError::Parse(format!(
                    "Invalid date-time '{}'. Expected YYYY-MM-DDTHH:mm",
                    s
                ))
            })
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.0.time()
    }

    /// Keep the time of day, swap the date.
    pub fn with_date(self, date: NaiveDate) -> Self {
        LocalDateTime::new(date, self.time())
    }

    /// Keep the date, swap the time of day.
    pub fn with_time(self, time: NaiveTime) -> Self {
        LocalDateTime::new(self.date(), time)
    }

    /// 00:00 on the same date.
    pub fn start_of_day(self) -> Self {
        self.with_time(NaiveTime::MIN)
    }

    /// 23:59 on the same date.
    pub fn end_of_day(self) -> Self {
        self.with_time(end_of_day())
    }

    /// Shift by whole hours, saturating at the first and last representable
    /// minute instead of overflowing.
    pub fn add_hours(self, hours: i64) -> Self {
        match Duration::try_hours(hours).and_then(|d| self.0.checked_add_signed(d)) {
            Some(dt) => LocalDateTime(dt),
            None if hours < 0 => LocalDateTime::new(NaiveDate::MIN, NaiveTime::MIN),
            None => LocalDateTime::new(NaiveDate::MAX, end_of_day()),
        }
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format(DATETIME_FORMAT))
    }
}

impl FromStr for LocalDateTime {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocalDateTime::parse(s)
    }
}

impl From<NaiveDateTime> for LocalDateTime {
    fn from(dt: NaiveDateTime) -> Self {
        LocalDateTime(minute_precision(dt))
    }
}

impl Serialize for LocalDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LocalDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        LocalDateTime::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> CalendarResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| {
        CalendarError::Parse(format!("Invalid date '{}'. Expected YYYY-MM-DD", s))
    })?;
    check_year(date, s)?;
    Ok(date)
}

fn check_year(date: NaiveDate, s: &str) -> CalendarResult<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        Ok(())
    } else {
        Err(CalendarError::Parse(format!(
            "Date '{}' is out of range. Expected a four-digit year",
            s.trim()
        )))
    }
}

/// Parse `HH:mm`.
pub fn parse_time(s: &str) -> CalendarResult<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), TIME_FORMAT)
        .map_err(|_| CalendarError::Parse(format!("Invalid time '{}'. Expected HH:mm", s)))
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Split a date-time string into its `YYYY-MM-DD` and `HH:mm` parts.
pub fn split_date_time(s: &str) -> CalendarResult<(String, String)> {
    let dt = LocalDateTime::parse(s)?;
    Ok((
        dt.date().format(DATE_FORMAT).to_string(),
        format_time(dt.time()),
    ))
}

/// Join `YYYY-MM-DD` and `HH:mm` parts into the canonical date-time string.
pub fn join_date_time(date: &str, time: &str) -> CalendarResult<String> {
    let dt = LocalDateTime::new(parse_date(date)?, parse_time(time)?);
    Ok(dt.to_string())
}

fn minute_precision(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_second(0)
        .and_then(|d| d.with_nanosecond(0))
        .unwrap_or(dt)
}
