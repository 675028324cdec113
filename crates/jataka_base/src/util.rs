//! Shared utility functions for jataka calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Whether `lon` lies strictly inside the arc running forward (in increasing
/// longitude) from `start` to `end`.
///
/// Endpoints are excluded; an arc of zero span contains nothing.
pub fn within_arc(lon: f64, start: f64, end: f64) -> bool {
    let span = normalize_360(end - start);
    let offset = normalize_360(lon - start);
    offset > 0.0 && offset < span
}
