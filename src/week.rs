use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Europe::London;

/// Length of a collection window in seconds.
pub const WEEK_SECS: i64 = 604_800;

/// Seven day interval of Unix timestamps, anchored on a GB midnight.
///
/// Membership is strict on both ends: a match starting exactly at `start` or
/// `end` is outside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: i64,
    iso_week: u32,
}

impl TimeWindow {
    pub fn new(start: i64, iso_week: u32) -> Self {
        Self { start, iso_week }
    }

    /// Window opening at 00:00 GB time on the date one week before `now`.
    pub fn last_week(now: DateTime<Utc>) -> Self {
        let today = now.with_timezone(&London).date_naive();
        let start_date = today - TimeDelta::weeks(1);

        Self {
            start: gb_midnight(start_date),
            iso_week: start_date.iso_week().week(),
        }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.start + WEEK_SECS
    }

    /// ISO week number of the window's first day, used to name weekly files.
    pub fn iso_week(&self) -> u32 {
        self.iso_week
    }

    pub fn contains(&self, timestamp: i64) -> bool {
        self.start < timestamp && timestamp < self.end()
    }
}

fn gb_midnight(date: NaiveDate) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);

    // GB clocks change at 01:00, midnight always exists
    London
        .from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.timestamp())
        .unwrap_or_else(|| midnight.and_utc().timestamp())
}
