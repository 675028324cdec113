//! Birth balance calculation for nakshatra-anchored dasha systems.
//!
//! The Moon's position within its nakshatra at birth determines how much
//! of the first period has already elapsed.

use crate::nakshatra::NAKSHATRA_SPAN;
use crate::util::normalize_360;

/// Compute the nakshatra birth balance.
///
/// Returns `(nakshatra_index, balance_days, elapsed_fraction)`:
/// - `nakshatra_index`: 0-based index (0=Ashwini..26=Revati) of the Moon's nakshatra
/// - `balance_days`: remaining days in the starting lord's period
/// - `elapsed_fraction`: fraction of the nakshatra already traversed [0, 1)
pub fn nakshatra_birth_balance(moon_sidereal_lon: f64, entry_period_days: f64) -> (u8, f64, f64) {
    let lon = normalize_360(moon_sidereal_lon);
    let nak_idx = (lon / NAKSHATRA_SPAN).floor() as u8;
    let nak_idx = nak_idx.min(26);
    let position_in_nak = lon - (nak_idx as f64) * NAKSHATRA_SPAN;
    let elapsed_fraction = position_in_nak / NAKSHATRA_SPAN;
    let balance_days = entry_period_days * (1.0 - elapsed_fraction);
    (nak_idx, balance_days, elapsed_fraction)
}
