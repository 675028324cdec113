//! Calendar time for jataka calculations.
//!
//! Provides `UtcTime`, the canonical UTC representation used throughout the
//! workspace, plus Julian Day conversion and timezone-offset handling. Dasha
//! period math runs in Julian Days; this crate is the boundary where those
//! values become ISO-8601 timestamps.
//!
//! Leap seconds are intentionally not modeled: period boundaries carry a
//! 1-second tolerance and astronomical time scales belong to the external
//! ephemeris provider.

pub mod error;
pub mod julian;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{calendar_to_jd, jd_to_calendar};
pub use utc_time::{UtcTime, days_in_month, is_leap_year, parse_date, parse_time, utc_from_local};
