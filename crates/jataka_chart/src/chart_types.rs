//! Types crossing the provider boundary: raw positions in, resolved
//! positions and mismatch records out.

use jataka_base::{Graha, Rashi};

/// A sign value as delivered by the upstream provider: either a name
/// (English/Nepali, any documented spelling) or an already-numeric 1-12.
#[derive(Debug, Clone, PartialEq)]
pub enum SignValue {
    Name(String),
    Number(u8),
}

impl SignValue {
    /// Convenience constructor from a string slice.
    pub fn name(s: &str) -> Self {
        Self::Name(s.to_string())
    }
}

/// A raw planetary position as delivered by the upstream provider.
///
/// Nothing here is trusted: the planet and sign are re-parsed, the
/// longitude is range-checked, and the house (if any) is re-derived.
#[derive(Debug, Clone, PartialEq)]
pub struct RawGrahaPosition {
    /// Provider planet name (English, Sanskrit-roman, or Devanagari).
    pub planet: String,
    /// Provider sign (name or 1-12 number).
    pub sign: SignValue,
    /// Sidereal ecliptic longitude in degrees, when the provider has it.
    pub longitude_deg: Option<f64>,
    /// Provider-computed house, if any. Never authoritative.
    pub house: Option<u8>,
    /// Retrograde flag.
    pub retrograde: bool,
}

impl RawGrahaPosition {
    /// Minimal raw position: planet + sign only.
    pub fn new(planet: &str, sign: SignValue) -> Self {
        Self {
            planet: planet.to_string(),
            sign,
            longitude_deg: None,
            house: None,
            retrograde: false,
        }
    }
}

/// A normalized planetary position with the authoritative whole-sign house.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrahaPosition {
    pub graha: Graha,
    pub rashi: Rashi,
    /// Whole-sign house relative to the chart's lagna, 1-12. Always derived,
    /// never copied from the provider.
    pub bhava: u8,
    /// Sidereal longitude, when the provider supplied one.
    pub longitude_deg: Option<f64>,
    pub retrograde: bool,
}

/// A recorded disagreement between a provider-supplied house and the
/// derived whole-sign house. The derived value won; this record exists so
/// callers can see (and tests can assert on) unreliable upstream data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BhavaMismatch {
    pub graha: Graha,
    /// The provider's claim, as received (may itself be out of range).
    pub provided_bhava: u8,
    /// The authoritative whole-sign house.
    pub derived_bhava: u8,
}

/// A fully resolved chart: lagna, normalized positions, and the mismatch
/// side-channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedChart {
    pub lagna: Rashi,
    pub positions: Vec<GrahaPosition>,
    pub mismatches: Vec<BhavaMismatch>,
}

impl ResolvedChart {
    /// Find a graha's position, if present in this chart.
    pub fn position(&self, graha: Graha) -> Option<&GrahaPosition> {
        self.positions.iter().find(|p| p.graha == graha)
    }
}
