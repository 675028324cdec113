//! UTC calendar date/time with sub-second precision.
//!
//! `UtcTime` is the canonical timestamp representation used throughout the
//! workspace. Dasha period boundaries are computed in Julian Days and
//! rendered back through this type, so the JD round trip must stay well
//! under the 1-second partition tolerance.

use std::fmt;
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

/// Days in each month of a non-leap year.
const MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        MONTH_DAYS[(month - 1) as usize]
    }
}

impl UtcTime {
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

    /// Check all calendar fields are in range.
    pub fn validate(&self) -> Result<(), TimeError> {
        if self.month < 1 || self.month > 12 {
            return Err(TimeError::InvalidDate("month must be 1-12"));
        }
        if self.day < 1 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::InvalidDate("day out of range for month"));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidDate("hour must be 0-23"));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidDate("minute must be 0-59"));
        }
        if !self.second.is_finite() || self.second < 0.0 || self.second >= 60.0 {
            return Err(TimeError::InvalidDate("second must be in [0, 60)"));
        }
        Ok(())
    }

    /// Convert to Julian Day (UTC).
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Convert from a Julian Day (UTC) back to calendar fields.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        // Round to microseconds before splitting so boundary instants
        // (e.g. exact midnights reached through JD arithmetic) don't land
        // on 23:59:59.999999 of the previous day.
        let total_seconds = ((day_frac - day as f64) * 86_400.0 * 1e6).round() / 1e6;
        if total_seconds >= 86_400.0 {
            // Carried over a day boundary by the rounding itself.
            return Self::from_jd(calendar_to_jd(year, month, day as f64 + 1.0));
        }
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds - hour as f64 * 3600.0) / 60.0).floor() as u32;
        let second = total_seconds - hour as f64 * 3600.0 - minute as f64 * 60.0;
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

/// Shift a local civil time by a timezone offset to obtain UTC.
///
/// `offset_minutes` is the offset *ahead of* UTC (e.g. Kathmandu = +345),
/// so UTC = local - offset.
pub fn utc_from_local(local: &UtcTime, offset_minutes: i32) -> UtcTime {
    UtcTime::from_jd(local.to_jd() - offset_minutes as f64 / 1440.0)
}

impl fmt::Display for UtcTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-6 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDTHH:MM[:SS[.fff]][Z]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_end_matches('Z');
        let (date, time) = s
            .split_once('T')
            .ok_or(TimeError::InvalidFormat("expected 'T' separator"))?;
        let (year, month, day) = parse_date(date)?;
        let (hour, minute, second) = parse_time(time)?;
        let t = UtcTime::new(year, month, day, hour, minute, second);
        t.validate()?;
        Ok(t)
    }
}

/// Parse a `YYYY-MM-DD` date string.
pub fn parse_date(s: &str) -> Result<(i32, u32, u32), TimeError> {
    let mut parts = s.trim().splitn(3, '-');
    let year = parts
        .next()
        .and_then(|p| p.parse::<i32>().ok())
        .ok_or(TimeError::InvalidFormat("bad year in date"))?;
    let month = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or(TimeError::InvalidFormat("bad month in date"))?;
    let day = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or(TimeError::InvalidFormat("bad day in date"))?;
    Ok((year, month, day))
}

/// Parse an `HH:mm[:ss[.fff]]` time string (seconds optional).
pub fn parse_time(s: &str) -> Result<(u32, u32, f64), TimeError> {
    let mut parts = s.trim().splitn(3, ':');
    let hour = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or(TimeError::InvalidFormat("bad hour in time"))?;
    let minute = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or(TimeError::InvalidFormat("bad minute in time"))?;
    let second = match parts.next() {
        Some(p) => p
            .parse::<f64>()
            .map_err(|_| TimeError::InvalidFormat("bad second in time"))?,
        None => 0.0,
    };
    Ok((hour, minute, second))
}
