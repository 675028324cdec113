//! Julian Day conversion for the Gregorian calendar.
//!
//! Meeus (Astronomical Algorithms, Ch.7) in both directions. The day
//! argument carries the time of day as a fraction, so a full calendar
//! instant round-trips through a single f64.

/// Convert a Gregorian calendar date to a Julian Day number.
///
/// `day` may carry a fractional part for the time of day
/// (e.g. 1.5 = noon on the 1st).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Convert a Julian Day number back to a Gregorian calendar date.
///
/// Returns `(year, month, day)` where `day` carries the time of day as a
/// fractional part.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = (if e < 14.0 { e - 1.0 } else { e - 13.0 }) as u32;
    let year = if month > 2 {
        (c - 4716.0) as i32
    } else {
        (c - 4715.0) as i32
    };

    (year, month, day)
}
