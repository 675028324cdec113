//! Provider-data normalization: parse, range-check, derive houses.
//!
//! Resolution is all-or-nothing: an unknown sign/planet or an out-of-range
//! longitude aborts the whole chart with an error, while provider/derived
//! house disagreements are recorded in a side list and never abort anything.

use jataka_base::{Graha, JatakaError, Rashi, bhava_from_rashi};

use crate::chart_types::{BhavaMismatch, GrahaPosition, RawGrahaPosition, ResolvedChart, SignValue};
use crate::error::ChartError;

/// Resolve a provider sign value (name or number) to a rashi.
pub fn resolve_sign(value: &SignValue) -> Result<Rashi, JatakaError> {
    match value {
        SignValue::Name(name) => Rashi::parse(name),
        SignValue::Number(n) => {
            Rashi::from_number(*n).ok_or_else(|| JatakaError::UnknownSign(n.to_string()))
        }
    }
}

/// Resolve one raw position against a lagna.
///
/// The house is always derived from `(rashi, lagna)`. A provider house that
/// disagrees (or is out of range) is returned as a mismatch record; the
/// derived value is used either way.
pub fn resolve_position(
    raw: &RawGrahaPosition,
    lagna: Rashi,
) -> Result<(GrahaPosition, Option<BhavaMismatch>), ChartError> {
    let graha = Graha::parse(&raw.planet)?;
    let rashi = resolve_sign(&raw.sign)?;

    if let Some(lon) = raw.longitude_deg {
        if !lon.is_finite() || !(0.0..360.0).contains(&lon) {
            return Err(ChartError::Base(JatakaError::InvalidInput(
                "longitude must be in [0, 360)",
            )));
        }
    }

    let derived = bhava_from_rashi(rashi, lagna);
    let mismatch = match raw.house {
        Some(provided) if provided != derived => Some(BhavaMismatch {
            graha,
            provided_bhava: provided,
            derived_bhava: derived,
        }),
        _ => None,
    };

    let position = GrahaPosition {
        graha,
        rashi,
        bhava: derived,
        longitude_deg: raw.longitude_deg,
        retrograde: raw.retrograde,
    };
    Ok((position, mismatch))
}

/// Resolve a whole chart from the lagna and the provider's position list.
///
/// Returns a complete, internally consistent chart or an error: never a
/// partially populated one.
pub fn resolve_chart(
    lagna: &SignValue,
    raw_positions: &[RawGrahaPosition],
) -> Result<ResolvedChart, ChartError> {
    let lagna = resolve_sign(lagna)?;

    let mut positions = Vec::with_capacity(raw_positions.len());
    let mut mismatches = Vec::new();

    for raw in raw_positions {
        let (position, mismatch) = resolve_position(raw, lagna)?;
        positions.push(position);
        if let Some(m) = mismatch {
            mismatches.push(m);
        }
    }

    Ok(ResolvedChart {
        lagna,
        positions,
        mismatches,
    })
}
