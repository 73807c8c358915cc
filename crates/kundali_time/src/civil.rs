//! Local civil date/time as entered for a birth, and its conversion to UT.
//!
//! Birth data arrives as a calendar date (`YYYY-MM-DD`) and a local clock
//! time (`HH:MM` or `HH:MM:SS`). Conversion to a UT Julian Date subtracts a
//! fixed UTC offset; no time-zone database is consulted.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// Indian Standard Time, the default offset applied to birth clock times.
pub const IST_OFFSET_HOURS: f64 = 5.5;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Local civil date and clock time with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl LocalDateTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Parse a `YYYY-MM-DD` date and an `HH:MM[:SS]` time.
    pub fn parse(date: &str, time: &str) -> Result<Self, TimeError> {
        let d = parse_date(date)?;
        let t = parse_time(time)?;
        Ok(Self::from_naive(d.and_time(t)))
    }

    /// Build from a chrono datetime.
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second() as f64 + dt.nanosecond() as f64 * 1e-9,
        }
    }

    /// Julian Date of this clock reading taken as-is (no offset applied).
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// UT Julian Date, treating this reading as local time `utc_offset_hours`
    /// ahead of UTC.
    pub fn to_jd_ut(&self, utc_offset_hours: f64) -> Result<f64, TimeError> {
        if !(-14.0..=14.0).contains(&utc_offset_hours) {
            return Err(TimeError::InvalidUtcOffset(utc_offset_hours));
        }
        Ok(self.to_jd() - utc_offset_hours / 24.0)
    }

    /// Rebuild a clock reading from a Julian Date (no offset applied).
    ///
    /// The time of day is rounded to the nearest millisecond, carrying into
    /// the next day when it reaches midnight.
    pub fn from_jd(jd: f64) -> Self {
        let shifted = jd + 0.5;
        let mut midnight = shifted.floor() - 0.5;
        let mut millis = ((shifted - shifted.floor()) * MILLIS_PER_DAY).round() as u64;
        if millis >= MILLIS_PER_DAY as u64 {
            midnight += 1.0;
            millis = 0;
        }

        let (year, month, day_frac) = jd_to_calendar(midnight);
        let day = day_frac.round() as u32;
        let hour = (millis / 3_600_000) as u32;
        let minute = (millis % 3_600_000 / 60_000) as u32;
        let second = (millis % 60_000) as f64 / 1000.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl std::fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second as u32
        )
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| TimeError::InvalidDate(s.into()))
}

/// Parse an `HH:MM` or `HH:MM:SS` clock time.
pub fn parse_time(s: &str) -> Result<NaiveTime, TimeError> {
    let trimmed = s.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| TimeError::InvalidTime(s.into()))
}
